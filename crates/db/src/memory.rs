//! In-process [`ProjectStore`], used when no database is configured and by
//! tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use keel_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::project::{NewProject, Project};
use crate::store::{ProjectFilter, ProjectStore};

struct Rows {
    by_id: BTreeMap<DbId, Project>,
    next_id: DbId,
}

/// Keeps every project in a map guarded by an `RwLock`.
///
/// Ids start at 1 and are never reused, mirroring a BIGSERIAL column.
pub struct InMemoryProjectStore {
    rows: RwLock<Rows>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored rows, soft-deleted ones included.
    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn find_where(&self, filter: ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let rows = self.rows.read().await;
        Ok(rows
            .by_id
            .values()
            .filter(|project| filter.matches(project))
            .cloned()
            .collect())
    }

    async fn insert(&self, input: &NewProject) -> Result<Project, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let id = rows.next_id;
        rows.next_id += 1;

        let project = input.clone().into_project(id);
        rows.by_id.insert(id, project.clone());
        tracing::trace!(project_id = id, "Inserted project in memory");
        Ok(project)
    }

    async fn update(&self, project: &Project) -> Result<Option<Project>, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.by_id.get_mut(&project.id) else {
            return Ok(None);
        };

        // Creation audit is owned by the stored row.
        row.name = project.name.clone();
        row.is_active = project.is_active;
        row.updated_at = project.updated_at;
        row.updated_by = project.updated_by;
        Ok(Some(row.clone()))
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
