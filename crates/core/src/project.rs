//! Request-side rules for the project resource.

use serde::Deserialize;

use crate::types::DbId;
use crate::validation::{Constraint, FieldRule, JsonType, Schema};

/// Entity name used in error messages and logs.
pub const ENTITY: &str = "Project";

/// Body of `POST /api/v1/projects` after it passed [`upsert_schema`].
///
/// `id` is `None` when the client sent an explicit `null`, which always
/// creates a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProject {
    pub id: Option<DbId>,
    pub name: String,
}

/// Shape accepted by the upsert endpoint.
///
/// Both keys must be present. `id` may be null; `name` must be a non-blank
/// string.
/// Any other key is rejected.
pub fn upsert_schema() -> Schema {
    Schema::new(vec![
        FieldRule::new(
            "id",
            vec![Constraint::Type(JsonType::Integer), Constraint::Required],
        ),
        FieldRule::new(
            "name",
            vec![
                Constraint::Type(JsonType::String),
                Constraint::NotBlank,
                Constraint::Required,
            ],
        ),
    ])
}
