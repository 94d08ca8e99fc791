//! Route definitions for login, logout, and the current user.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes mounted directly under `/api`.
///
/// ```text
/// POST /login   -> login
/// POST /logout  -> logout
/// GET  /user    -> current_user  (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
}
