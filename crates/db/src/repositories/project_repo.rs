//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, software, thumbnail, description, category, size, \
                        content, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `content` is `None` in the input, defaults to an empty block array.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, title, software, thumbnail, description, category, size, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, '[]'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.software)
            .bind(&input.thumbnail)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.size)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its slug.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    ///
    /// This ordering is the store-return order the related-projects
    /// selection relies on; keep it stable.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed on every call.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                software = COALESCE($3, software),
                thumbnail = COALESCE($4, thumbnail),
                description = COALESCE($5, description),
                category = COALESCE($6, category),
                size = COALESCE($7, size),
                content = COALESCE($8, content),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.software)
            .bind(&input.thumbnail)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.size)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by slug. Returns `true` if a row was removed;
    /// deleting an unknown slug is a no-op returning `false`, not an error.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of project rows. Used by the seed binary to avoid re-seeding.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }
}
