//! Project entity model and DTOs.

use keel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub updated_at: Timestamp,
    pub updated_by: DbId,
}

impl Project {
    /// Apply an update by `user`: rename, refresh the update audit fields and
    /// mark active. Creation audit fields are left alone.
    pub fn touch(&mut self, name: &str, user: DbId, now: Timestamp) {
        self.name = name.to_string();
        self.updated_at = now;
        self.updated_by = user;
        self.is_active = true;
    }

    /// Soft-delete. Audit fields are not refreshed.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// DTO for inserting a new project. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub updated_at: Timestamp,
    pub updated_by: DbId,
}

impl NewProject {
    /// A fresh, active project created and last updated by `user` at `now`.
    pub fn new(name: &str, user: DbId, now: Timestamp) -> Self {
        Self {
            name: name.to_string(),
            is_active: true,
            created_at: now,
            created_by: user,
            updated_at: now,
            updated_by: user,
        }
    }

    /// Attach the store-assigned id.
    pub fn into_project(self, id: DbId) -> Project {
        Project {
            id,
            name: self.name,
            is_active: self.is_active,
            created_at: self.created_at,
            created_by: self.created_by,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
        }
    }
}
