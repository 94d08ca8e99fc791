//! Project entity model and DTOs.

use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `content` is the JSON-serialized content-block array; it is served to
/// clients as-is and decoded with the fail-soft parser in `folio_core`
/// wherever blocks are needed server-side.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Caller-supplied slug, immutable after creation.
    pub id: String,
    pub title: String,
    pub software: String,
    pub thumbnail: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Struct-level `default` keeps missing fields from failing body extraction;
/// required-field checks run in `folio_core::project` so the API answers
/// with a 400 and a field-specific message instead of a deserialization
/// error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProject {
    pub id: String,
    pub title: String,
    pub software: String,
    pub thumbnail: String,
    pub description: String,
    pub category: String,
    pub size: String,
    /// Serialized content-block array; defaults to an empty sequence.
    pub content: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; the id is
/// immutable and not part of the patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub software: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub content: Option<String>,
}
