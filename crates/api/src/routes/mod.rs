//! Route definitions.

use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod health;
pub mod project;

/// All routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .merge(auth::router())
}
