//! Handlers for login, logout, and the current-user lookup.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use folio_core::error::CoreError;
use folio_core::project::require_field;
use folio_core::types::{DbId, Timestamp};
use folio_db::models::session::CreateSession;
use folio_db::models::user::UserResponse;
use folio_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::auth::token::{generate_session_token, hash_session_token};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{bearer_token, AuthUser};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
///
/// Struct-level `default` keeps a missing field from failing extraction so
/// the handler can answer 400 with a field-specific message.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response: the user's public fields plus the session
/// token the client presents as `Authorization: Bearer <token>`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
    pub token: String,
}

/// Response body for `POST /api/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with username + password. Establishes a session and returns
/// the user alongside its bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    require_field("Username", &input.username)?;
    require_field("Password", &input.password)?;

    // A missing user and a wrong password answer identically.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let (plaintext, token_hash) = generate_session_token();
    let session_input = CreateSession {
        user_id: user.id,
        token_hash,
        expires_at: Utc::now() + chrono::Duration::days(state.config.session_ttl_days),
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    tracing::info!(user_id = user.id, "Admin logged in");

    Ok(Json(LoginResponse {
        id: user.id,
        username: user.username,
        created_at: user.created_at,
        token: plaintext,
    }))
}

/// POST /api/logout
///
/// Revoke the caller's session if a valid bearer token is presented.
/// Always answers 200; logging out without a session is not an error.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<LogoutResponse>> {
    if let Some(token) = bearer_token(&headers) {
        let hash = hash_session_token(token);
        if let Some(session) = SessionRepo::find_active_by_token_hash(&state.pool, &hash).await? {
            SessionRepo::revoke(&state.pool, session.id).await?;
            tracing::info!(user_id = session.user_id, "Admin logged out");
        }
    }
    Ok(Json(LogoutResponse {
        message: "Logged out successfully",
    }))
}

/// GET /api/user
///
/// The authenticated principal behind the current session.
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    Ok(Json(UserResponse::from(&user)))
}
