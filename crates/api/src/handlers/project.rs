//! Handlers for the `/projects` resource.
//!
//! Reads are public; writes require an authenticated session. The
//! [`AuthUser`] extractor rejects unauthenticated callers with 401 before
//! any store access happens.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::content::ContentBlocks;
use folio_core::error::CoreError;
use folio_core::project::{validate_new_project, validate_project_patch};
use folio_core::related::related_count;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: id.to_string(),
    })
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(project))
}

/// GET /api/projects/{id}/related
///
/// Sibling projects for the detail page's "other projects" rail. The count
/// comes from the content-weight heuristic; selection is the first N other
/// projects in store-return order.
pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    // Fail-soft: corrupt content means no blocks, which means no rail.
    let blocks = ContentBlocks::deserialize(&project.content);
    let count = related_count(&blocks);

    let siblings: Vec<Project> = ProjectRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|p| p.id != id)
        .take(count)
        .collect();
    Ok(Json(siblings))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_new_project(
        &input.id,
        &input.title,
        &input.software,
        &input.thumbnail,
        &input.description,
        &input.category,
        &input.size,
    )?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    validate_project_patch(
        input.title.as_deref(),
        input.software.as_deref(),
        input.thumbnail.as_deref(),
        input.description.as_deref(),
        input.category.as_deref(),
        input.size.as_deref(),
    )?;
    let project = ProjectRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, &id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&id))
    }
}
