//! Draft/commit state for a project editing session.
//!
//! The editor mutates an in-memory copy of a project's block sequence and
//! only persists on an explicit save: there is no autosave, and intermediate
//! edits live solely in the draft. `ProjectDraft` makes that lifecycle
//! explicit -- a mutable draft hydrated from the persisted string, a dirty
//! flag tracking unsaved changes, and a single `commit` that produces the
//! string to write back.
//!
//! Concurrent saves from two sessions are not guarded by a version token;
//! last write wins on `updated_at`. Callers should serialize their own save
//! requests.

use crate::content::{BlockKind, ContentBlock, ContentBlocks};
use crate::error::CoreError;

/// In-memory editing state for one project's content blocks.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    blocks: ContentBlocks,
    dirty: bool,
}

impl ProjectDraft {
    /// Start an editing session from a persisted content string.
    ///
    /// Corrupt input hydrates to an empty draft (fail-soft, same as the
    /// detail view).
    pub fn from_saved(raw: &str) -> Self {
        Self {
            blocks: ContentBlocks::deserialize(raw),
            dirty: false,
        }
    }

    /// The draft's current block sequence.
    pub fn blocks(&self) -> &ContentBlocks {
        &self.blocks
    }

    /// Whether the draft has edits not yet committed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn append(&mut self, kind: BlockKind) {
        self.blocks.append(kind);
        self.dirty = true;
    }

    pub fn update_content(&mut self, index: usize, content: &str) -> Result<(), CoreError> {
        self.blocks.update_content(index, content)?;
        self.dirty = true;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ContentBlock, CoreError> {
        let removed = self.blocks.remove(index)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn move_block(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        self.blocks.move_block(from, to)?;
        self.dirty = true;
        Ok(())
    }

    /// Serialize the draft for persistence and mark it clean.
    ///
    /// The caller is responsible for the actual write; a failed write should
    /// discard the returned string and keep the draft as-is.
    pub fn commit(&mut self) -> String {
        self.dirty = false;
        self.blocks.serialize()
    }
}
