//! Project metadata enums and field validation.
//!
//! Categories and layout sizes are closed sets stored as lowercase TEXT;
//! parsing an unknown member is a validation error (not a panic and not a
//! silent default). Field validation is shared by the create and update
//! handlers so both reject the same malformed input with a 400.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Enumerated metadata
// ---------------------------------------------------------------------------

/// Portfolio category a project is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Environment,
    Technical,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Environment => "environment",
            Category::Technical => "technical",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "environment" => Ok(Category::Environment),
            "technical" => Ok(Category::Technical),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'. Must be one of: environment, technical"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery layout hint for a project's tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSize {
    Medium,
    Large,
    Wide,
}

impl ProjectSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectSize::Medium => "medium",
            ProjectSize::Large => "large",
            ProjectSize::Wide => "wide",
        }
    }
}

impl FromStr for ProjectSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medium" => Ok(ProjectSize::Medium),
            "large" => Ok(ProjectSize::Large),
            "wide" => Ok(ProjectSize::Wide),
            other => Err(CoreError::Validation(format!(
                "Invalid size '{other}'. Must be one of: medium, large, wide"
            ))),
        }
    }
}

impl fmt::Display for ProjectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate that a required display field is present and non-empty.
pub fn require_field(name: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{name} is required")))
    } else {
        Ok(())
    }
}

/// Validate the full field set of a new project.
///
/// The id is caller-supplied (it becomes the URL slug) and required like the
/// display fields; category and size must be valid enum members.
#[allow(clippy::too_many_arguments)]
pub fn validate_new_project(
    id: &str,
    title: &str,
    software: &str,
    thumbnail: &str,
    description: &str,
    category: &str,
    size: &str,
) -> Result<(), CoreError> {
    require_field("id", id)?;
    require_field("Title", title)?;
    require_field("Software", software)?;
    require_field("Thumbnail", thumbnail)?;
    require_field("Description", description)?;
    category.parse::<Category>()?;
    size.parse::<ProjectSize>()?;
    Ok(())
}

/// Validate the provided fields of a partial project update.
///
/// Only fields present in the patch are checked; an omitted field keeps its
/// stored value.
pub fn validate_project_patch(
    title: Option<&str>,
    software: Option<&str>,
    thumbnail: Option<&str>,
    description: Option<&str>,
    category: Option<&str>,
    size: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(title) = title {
        require_field("Title", title)?;
    }
    if let Some(software) = software {
        require_field("Software", software)?;
    }
    if let Some(thumbnail) = thumbnail {
        require_field("Thumbnail", thumbnail)?;
    }
    if let Some(description) = description {
        require_field("Description", description)?;
    }
    if let Some(category) = category {
        category.parse::<Category>()?;
    }
    if let Some(size) = size {
        size.parse::<ProjectSize>()?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
