//! Ordered content-block model for project detail pages.
//!
//! A project's body is a sequence of typed blocks (title, text, image,
//! video), each carrying its own `order` field. Structural edits (append,
//! remove, move) keep `order` gapless and zero-based; every rendering path
//! re-derives display order by sorting on `order` rather than trusting
//! storage position, so a record touched by a partial update still renders
//! correctly.
//!
//! The sequence is persisted inside the project row as a JSON string.
//! Deserialization is fail-soft: a corrupt or legacy payload degrades to an
//! empty sequence instead of failing the caller, so a bad record never
//! blocks a page render.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Block types
// ---------------------------------------------------------------------------

/// The kind of a content block, determining how its payload is rendered.
///
/// `Title` and `Text` carry free text; `Image` and `Video` carry a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Title,
    Text,
    Image,
    Video,
}

/// One typed unit of a project's detail-page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Free text for title/text blocks, a URL for image/video blocks.
    pub content: String,
    /// Render position. Unique within a project, zero-based, contiguous.
    pub order: i64,
}

// ---------------------------------------------------------------------------
// Block sequence
// ---------------------------------------------------------------------------

/// An ordered, gapless sequence of content blocks.
///
/// Invariant: after every structural edit, `order` values are exactly
/// `0..n-1` matching each block's position in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlocks(Vec<ContentBlock>);

impl ContentBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Blocks in storage order. Rendering paths should use [`sorted`] instead.
    ///
    /// [`sorted`]: ContentBlocks::sorted
    pub fn as_slice(&self) -> &[ContentBlock] {
        &self.0
    }

    /// Append a new empty block of the given kind at the end of the sequence.
    ///
    /// The new block's `order` is the current length. Never fails.
    pub fn append(&mut self, kind: BlockKind) {
        let order = self.0.len() as i64;
        self.0.push(ContentBlock {
            kind,
            content: String::new(),
            order,
        });
    }

    /// Replace the content of the block at `index`. Ordering is untouched.
    pub fn update_content(&mut self, index: usize, content: &str) -> Result<(), CoreError> {
        let len = self.0.len();
        let block = self
            .0
            .get_mut(index)
            .ok_or(CoreError::OutOfRange { index, len })?;
        block.content = content.to_string();
        Ok(())
    }

    /// Delete the block at `index` and reindex the remainder to `0..n-1`.
    pub fn remove(&mut self, index: usize) -> Result<ContentBlock, CoreError> {
        if index >= self.0.len() {
            return Err(CoreError::OutOfRange {
                index,
                len: self.0.len(),
            });
        }
        let removed = self.0.remove(index);
        self.reindex();
        Ok(removed)
    }

    /// Move the block at `from` to position `to`, then reindex.
    ///
    /// `to` is clamped to the valid range, so dragging past either end of
    /// the list lands the block at the boundary. `from` must be a valid
    /// position.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        if from >= self.0.len() {
            return Err(CoreError::OutOfRange {
                index: from,
                len: self.0.len(),
            });
        }
        let block = self.0.remove(from);
        let to = to.min(self.0.len());
        self.0.insert(to, block);
        self.reindex();
        Ok(())
    }

    /// Blocks in render order, ascending by their `order` field.
    ///
    /// Restartable: each call produces a fresh iteration. Storage order is
    /// never assumed to equal display order.
    pub fn sorted(&self) -> impl Iterator<Item = &ContentBlock> {
        let mut refs: Vec<&ContentBlock> = self.0.iter().collect();
        refs.sort_by_key(|b| b.order);
        refs.into_iter()
    }

    /// Serialize the sequence to its persisted JSON string form.
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse a persisted string into a block sequence.
    ///
    /// Fail-soft: malformed or non-array input yields an empty sequence so
    /// a corrupt record degrades to "no content blocks" rather than an
    /// error the surrounding page has to handle.
    pub fn deserialize(raw: &str) -> Self {
        serde_json::from_str::<Vec<ContentBlock>>(raw)
            .map(Self)
            .unwrap_or_default()
    }

    /// Rewrite every block's `order` to match its sequence position.
    fn reindex(&mut self) {
        for (i, block) in self.0.iter_mut().enumerate() {
            block.order = i as i64;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
