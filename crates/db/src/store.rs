//! The persistence contract the HTTP layer depends on.

use async_trait::async_trait;
use keel_core::types::DbId;

use crate::models::project::{NewProject, Project};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Row predicate for [`ProjectStore::find_where`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// `None` matches both active and soft-deleted rows.
    pub is_active: Option<bool>,
}

impl ProjectFilter {
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.is_active.map_or(true, |flag| project.is_active == flag)
    }
}

/// Storage for projects.
///
/// Lookups return rows regardless of `is_active`; hiding soft-deleted
/// projects is the caller's job. Result order of `find_where` is not part of
/// the contract.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error>;

    async fn find_where(&self, filter: ProjectFilter) -> Result<Vec<Project>, sqlx::Error>;

    /// Persist a new project and return it with its assigned id.
    async fn insert(&self, input: &NewProject) -> Result<Project, sqlx::Error>;

    /// Persist changes to an existing project. `None` means the row is gone.
    async fn update(&self, project: &Project) -> Result<Option<Project>, sqlx::Error>;

    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// [`ProjectStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::find_by_id(&self.pool, id).await
    }

    async fn find_where(&self, filter: ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        ProjectRepo::list(&self.pool, filter.is_active).await
    }

    async fn insert(&self, input: &NewProject) -> Result<Project, sqlx::Error> {
        ProjectRepo::create(&self.pool, input).await
    }

    async fn update(&self, project: &Project) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::update(&self.pool, project).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
