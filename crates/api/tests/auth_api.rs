//! HTTP-level integration tests for login, logout, and the current-user
//! endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use folio_api::auth::password::hash_password;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row plus
/// the plaintext password used.
async fn create_test_user(pool: &PgPool, username: &str) -> (folio_db::models::user::User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        password_hash: hashed,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in a user via the API and return the JSON response containing the
/// user fields and the session `token`.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with the user fields and a session token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "mark").await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "mark", &password).await;

    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "mark");
    assert!(json["createdAt"].is_string());
    assert!(json["token"].is_string(), "response must contain a session token");
    // The password hash must never leak.
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "mark").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "mark", "password": "incorrect_password" });
    let response = post_json(app, "/api/login", body).await;

    common::assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

/// Login with a nonexistent username returns 401, same as a wrong password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A request missing the password field is malformed and returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_malformed_body(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "mark" });
    let response = post_json(app, "/api/login", body).await;

    common::assert_error_body(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

/// GET /api/user returns the authenticated principal.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_current_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "mark").await;
    let app = common::build_test_app(pool);

    let login = login_user(app.clone(), "mark", &password).await;
    let token = login["token"].as_str().unwrap();

    let response = get_auth(app, "/api/user", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "mark");
}

/// GET /api/user without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_current_user_unauthenticated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/user").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// GET /api/user with a garbage token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_current_user_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/user", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout revokes the session: the token stops working afterwards.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_session(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "mark").await;
    let app = common::build_test_app(pool);

    let login = login_user(app.clone(), "mark", &password).await;
    let token = login["token"].as_str().unwrap();

    let response =
        post_json_auth(app.clone(), "/api/logout", serde_json::json!({}), token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    // The revoked session no longer authenticates.
    let response = get_auth(app, "/api/user", token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout without a session is still a 200; there is nothing to revoke.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_without_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/logout", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
}
