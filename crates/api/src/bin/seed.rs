//! Database seeder: bootstraps the admin user and, when the table is empty,
//! a handful of sample portfolio projects.
//!
//! Usage: `ADMIN_USERNAME=mark ADMIN_PASSWORD=... cargo run --bin seed`

use folio_api::auth::password::hash_password;
use folio_core::content::{BlockKind, ContentBlocks};
use folio_db::models::project::CreateProject;
use folio_db::models::user::CreateUser;
use folio_db::repositories::{ProjectRepo, UserRepo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = folio_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    folio_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    seed_admin(&pool).await;
    seed_projects(&pool).await;
}

/// Create the admin user from `ADMIN_USERNAME` / `ADMIN_PASSWORD` unless a
/// user with that username already exists.
async fn seed_admin(pool: &folio_db::DbPool) {
    let username = std::env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set");
    let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

    let existing = UserRepo::find_by_username(pool, &username)
        .await
        .expect("User lookup failed");
    if existing.is_some() {
        tracing::info!(%username, "Admin user already exists, skipping");
        return;
    }

    let password_hash = hash_password(&password).expect("Password hashing failed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username,
            password_hash,
        },
    )
    .await
    .expect("Admin user creation failed");
    tracing::info!(user_id = user.id, "Admin user created");
}

/// Insert sample projects when the projects table is empty.
async fn seed_projects(pool: &folio_db::DbPool) {
    let count = ProjectRepo::count(pool).await.expect("Project count failed");
    if count > 0 {
        tracing::info!(count, "Projects already present, skipping sample data");
        return;
    }

    for input in sample_projects() {
        let project = ProjectRepo::create(pool, &input)
            .await
            .expect("Sample project insert failed");
        tracing::info!(id = %project.id, "Sample project created");
    }
}

fn sample_projects() -> Vec<CreateProject> {
    const THUMB: &str = "https://example.com/thumbnails/abstract.svg";

    let mut metropolis = ContentBlocks::new();
    metropolis.append(BlockKind::Text);
    metropolis
        .update_content(
            0,
            "A sprawling cyberpunk cityscape featuring advanced lighting systems \
             and procedural building generation.",
        )
        .expect("index in range");
    metropolis.append(BlockKind::Image);
    metropolis.update_content(1, THUMB).expect("index in range");
    metropolis.append(BlockKind::Text);
    metropolis
        .update_content(
            2,
            "This project showcases complex shader work and real-time rendering \
             optimization for large-scale environments.",
        )
        .expect("index in range");

    let mut woods = ContentBlocks::new();
    woods.append(BlockKind::Text);
    woods
        .update_content(
            0,
            "An enchanted forest environment with dynamic weather systems and \
             procedural vegetation.",
        )
        .expect("index in range");
    woods.append(BlockKind::Image);
    woods.update_content(1, THUMB).expect("index in range");

    vec![
        CreateProject {
            id: "cyberpunk-metropolis".to_string(),
            title: "Cyberpunk Metropolis".to_string(),
            software: "UE5 • Houdini • Substance".to_string(),
            thumbnail: THUMB.to_string(),
            description: "A sprawling cyberpunk cityscape featuring advanced lighting \
                          systems, procedural building generation, and atmospheric effects."
                .to_string(),
            category: "environment".to_string(),
            size: "large".to_string(),
            content: Some(metropolis.serialize()),
        },
        CreateProject {
            id: "mystical-woods".to_string(),
            title: "Mystical Woods".to_string(),
            software: "Blender • UE5".to_string(),
            thumbnail: THUMB.to_string(),
            description: "An enchanted forest environment with dynamic weather systems, \
                          procedural vegetation, and advanced lighting techniques."
                .to_string(),
            category: "environment".to_string(),
            size: "medium".to_string(),
            content: Some(woods.serialize()),
        },
    ]
}
