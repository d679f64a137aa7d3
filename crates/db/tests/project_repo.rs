//! Integration tests for the PostgreSQL project store.
//!
//! These need a live database (`DATABASE_URL`) and are ignored by default:
//! `cargo test -p keel-db -- --ignored`.

use chrono::Utc;
use keel_db::models::project::NewProject;
use keel_db::{PgProjectStore, ProjectFilter, ProjectStore};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_assigns_id_and_audit(pool: PgPool) {
    let store = PgProjectStore::new(pool);
    let project = store
        .insert(&NewProject::new("Apollo", 7, Utc::now()))
        .await
        .unwrap();

    assert!(project.id > 0);
    assert!(project.is_active);
    assert_eq!(project.created_by, 7);
    assert_eq!(project.updated_by, 7);

    let found = store.find_by_id(project.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Apollo");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_leaves_creation_columns_alone(pool: PgPool) {
    let store = PgProjectStore::new(pool);
    let created = store
        .insert(&NewProject::new("Apollo", 7, Utc::now()))
        .await
        .unwrap();

    let mut changed = created.clone();
    changed.created_by = 99;
    changed.touch("Gemini", 8, Utc::now());
    let saved = store.update(&changed).await.unwrap().unwrap();

    assert_eq!(saved.name, "Gemini");
    assert_eq!(saved.updated_by, 8);
    assert_eq!(saved.created_by, 7);
    assert_eq!(saved.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn soft_deleted_rows_stay_findable_by_id(pool: PgPool) {
    let store = PgProjectStore::new(pool);
    let mut project = store
        .insert(&NewProject::new("Apollo", 1, Utc::now()))
        .await
        .unwrap();
    project.deactivate();
    store.update(&project).await.unwrap();

    let found = store.find_by_id(project.id).await.unwrap().unwrap();
    assert!(!found.is_active);

    let active = store.find_where(ProjectFilter::active()).await.unwrap();
    assert!(active.iter().all(|p| p.id != project.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_of_missing_row_returns_none(pool: PgPool) {
    let store = PgProjectStore::new(pool);
    let ghost = NewProject::new("Ghost", 1, Utc::now()).into_project(424_242);
    assert!(store.update(&ghost).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn health_check_succeeds(pool: PgPool) {
    let store = PgProjectStore::new(pool);
    store.health_check().await.unwrap();
}
