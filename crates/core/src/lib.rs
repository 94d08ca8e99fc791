//! Domain logic for the portfolio backend.
//!
//! Pure, I/O-free building blocks shared by the database and API layers:
//!
//! - [`content`] -- the ordered content-block model behind the project editor
//!   and detail view.
//! - [`editor`] -- draft/commit state for an editing session.
//! - [`related`] -- the content-weight heuristic deciding how many sibling
//!   projects to surface.
//! - [`project`] -- project field validation and enumerated metadata.

pub mod content;
pub mod editor;
pub mod error;
pub mod project;
pub mod related;
pub mod types;
