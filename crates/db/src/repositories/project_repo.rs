//! Repository for the `projects` table.

use keel_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{NewProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, is_active, created_at, created_by, updated_at, updated_by";

/// Provides the queries behind [`crate::PgProjectStore`].
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, is_active, created_at, created_by, updated_at, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.is_active)
            .bind(input.created_at)
            .bind(input.created_by)
            .bind(input.updated_at)
            .bind(input.updated_by)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id, whether active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, optionally restricted to one `is_active` state.
    pub async fn list(pool: &PgPool, is_active: Option<bool>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(is_active)
            .fetch_all(pool)
            .await
    }

    /// Write back the mutable columns of an existing project.
    ///
    /// `created_at` and `created_by` are never written. Returns `None` if no
    /// row with the project's id exists.
    pub async fn update(pool: &PgPool, project: &Project) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                is_active = $3,
                updated_at = $4,
                updated_by = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project.id)
            .bind(&project.name)
            .bind(project.is_active)
            .bind(project.updated_at)
            .bind(project.updated_by)
            .fetch_optional(pool)
            .await
    }
}
