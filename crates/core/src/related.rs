//! Content-weight heuristic for the "other projects" rail.
//!
//! The detail page shows between 0 and 4 sibling projects depending on how
//! much content the current project carries: a near-empty page gets no rail,
//! a dense page gets the full four. This is a presentation heuristic, not a
//! recommendation algorithm -- selection is simply the first N other
//! projects in store-return order.

use crate::content::{BlockKind, ContentBlocks};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// A title block counts as 100 characters of text.
pub const TITLE_WEIGHT: usize = 100;

/// An image block counts as 200 characters of text.
pub const IMAGE_WEIGHT: usize = 200;

/// A video block counts as 300 characters of text.
pub const VIDEO_WEIGHT: usize = 300;

/// Upper bound on the number of related projects shown.
pub const MAX_RELATED: usize = 4;

// ---------------------------------------------------------------------------
// Heuristic
// ---------------------------------------------------------------------------

/// Weighted content size of a block sequence.
///
/// Text blocks contribute their character count; media and title blocks
/// contribute fixed text-equivalent weights.
pub fn content_weight(blocks: &ContentBlocks) -> usize {
    blocks
        .as_slice()
        .iter()
        .map(|block| match block.kind {
            BlockKind::Text => block.content.chars().count(),
            BlockKind::Title => TITLE_WEIGHT,
            BlockKind::Image => IMAGE_WEIGHT,
            BlockKind::Video => VIDEO_WEIGHT,
        })
        .sum()
}

/// How many sibling projects to surface alongside a project with the given
/// content blocks.
///
/// | Condition                         | Count |
/// |-----------------------------------|-------|
/// | no blocks or weight < 150         | 0     |
/// | <= 2 blocks or weight < 400       | 1     |
/// | <= 4 blocks or weight < 800       | 2     |
/// | <= 6 blocks or weight < 1200      | 3     |
/// | otherwise                         | 4     |
pub fn related_count(blocks: &ContentBlocks) -> usize {
    let total_blocks = blocks.len();
    let total_weight = content_weight(blocks);

    if total_blocks == 0 || total_weight < 150 {
        0
    } else if total_blocks <= 2 || total_weight < 400 {
        1
    } else if total_blocks <= 4 || total_weight < 800 {
        2
    } else if total_blocks <= 6 || total_weight < 1200 {
        3
    } else {
        MAX_RELATED
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
