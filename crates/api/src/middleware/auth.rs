//! Session-based authentication extractor for Axum handlers.
//!
//! The authenticated principal is request-scoped: handlers that need it
//! take [`AuthUser`] as a parameter, and unauthenticated requests are
//! rejected with 401 before the handler body (and any store access) runs.
//! There is no ambient global session state.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::SessionRepo;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a Bearer session token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The session row backing this request, for logout revocation.
    pub session_id: DbId,
}

/// Extract the Bearer token from an `Authorization` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })?;

        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(token))
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(AuthUser {
            user_id: session.user_id,
            session_id: session.id,
        })
    }
}
