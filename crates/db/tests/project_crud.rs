//! Database-level CRUD tests for the project repository.

use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;
use sqlx::PgPool;

fn sample_project(id: &str) -> CreateProject {
    CreateProject {
        id: id.to_string(),
        title: "Neon Harbor".to_string(),
        software: "UE5 • Houdini".to_string(),
        thumbnail: "https://example.com/thumb.png".to_string(),
        description: "A harbor at night.".to_string(),
        category: "environment".to_string(),
        size: "large".to_string(),
        content: None,
    }
}

#[sqlx::test]
async fn create_defaults_content_to_empty_array(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &sample_project("neon-harbor"))
        .await
        .expect("create should succeed");

    assert_eq!(created.id, "neon-harbor");
    assert_eq!(created.content, "[]");
    assert_eq!(created.created_at, created.updated_at);
}

#[sqlx::test]
async fn find_by_id_returns_none_for_unknown_slug(pool: PgPool) {
    let found = ProjectRepo::find_by_id(&pool, "nope")
        .await
        .expect("query should succeed");
    assert!(found.is_none());
}

#[sqlx::test]
async fn list_orders_newest_first(pool: PgPool) {
    ProjectRepo::create(&pool, &sample_project("older")).await.unwrap();
    // Force distinct created_at values.
    sqlx::query("UPDATE projects SET created_at = created_at - INTERVAL '1 hour' WHERE id = 'older'")
        .execute(&pool)
        .await
        .unwrap();
    ProjectRepo::create(&pool, &sample_project("newer")).await.unwrap();

    let listed = ProjectRepo::list(&pool).await.expect("list should succeed");
    let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["newer", "older"]);
}

#[sqlx::test]
async fn update_merges_partial_fields_and_refreshes_updated_at(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &sample_project("neon-harbor"))
        .await
        .unwrap();
    // Backdate so the refresh is observable.
    sqlx::query("UPDATE projects SET updated_at = updated_at - INTERVAL '1 hour' WHERE id = 'neon-harbor'")
        .execute(&pool)
        .await
        .unwrap();

    let patch = UpdateProject {
        title: Some("Neon Harbor Redux".to_string()),
        content: Some(r#"[{"type":"text","content":"hi","order":0}]"#.to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, "neon-harbor", &patch)
        .await
        .expect("update should succeed")
        .expect("row should exist");

    assert_eq!(updated.title, "Neon Harbor Redux");
    // Untouched fields keep their stored values.
    assert_eq!(updated.software, created.software);
    assert_eq!(updated.category, "environment");
    assert!(updated.content.contains("\"order\":0"));
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test]
async fn update_unknown_slug_returns_none(pool: PgPool) {
    let patch = UpdateProject {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, "ghost", &patch)
        .await
        .expect("update should succeed");
    assert!(updated.is_none());
}

#[sqlx::test]
async fn delete_is_idempotent(pool: PgPool) {
    ProjectRepo::create(&pool, &sample_project("doomed")).await.unwrap();

    assert!(ProjectRepo::delete(&pool, "doomed").await.unwrap());
    // Second delete is a no-op returning false, not an error.
    assert!(!ProjectRepo::delete(&pool, "doomed").await.unwrap());
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test]
async fn duplicate_slug_violates_primary_key(pool: PgPool) {
    ProjectRepo::create(&pool, &sample_project("twice")).await.unwrap();
    let err = ProjectRepo::create(&pool, &sample_project("twice"))
        .await
        .expect_err("duplicate insert should fail");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected database error, got: {other}"),
    }
}
