//! Handlers for the `/projects` resource.
//!
//! Projects are soft-deleted: a row with `is_active = false` is reported as
//! missing by every read, and a later upsert naming its id creates a fresh
//! project instead of reviving it.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use keel_core::error::CoreError;
use keel_core::project::{upsert_schema, UpsertProject, ENTITY};
use keel_core::types::DbId;
use keel_core::validation::{validate, FieldViolation};
use keel_db::models::project::{NewProject, Project};
use keel_db::{ProjectFilter, ProjectStore};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<Project>> {
    let project = find_active(state.projects.as_ref(), &raw_id)
        .await?
        .ok_or_else(|| not_found(raw_id))?;
    Ok(Envelope::ok(project))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Envelope<Vec<Project>>> {
    let projects = state.projects.find_where(ProjectFilter::active()).await?;
    if projects.is_empty() {
        return Err(CoreError::NoneFound { entity: ENTITY }.into());
    }
    Ok(Envelope::ok(projects))
}

/// POST /api/v1/projects
///
/// Creates or updates a project from `{ "id": int | null, "name": string }`.
/// The body is read raw so that malformed JSON counts as "no data" rather
/// than an extractor rejection.
pub async fn upsert(
    State(state): State<AppState>,
    user: AuthUser,
    body: Bytes,
) -> AppResult<Envelope<Project>> {
    let data = decode_body(&body);

    if let Some(violation) = validate(&data, &upsert_schema()).into_iter().next() {
        tracing::debug!(
            field = %violation.field,
            constraint = violation.constraint,
            "Rejected project payload"
        );
        return Err(CoreError::Validation(violation).into());
    }

    if data.is_null() {
        return Err(CoreError::EmptyPayload.into());
    }

    let input: UpsertProject = serde_json::from_value(data)
        .map_err(|err| CoreError::Validation(FieldViolation::document(err.to_string())))?;

    let project = add_or_update(state.projects.as_ref(), &input, user.user_id)
        .await?
        .ok_or(CoreError::PersistenceFailure { entity: ENTITY })?;

    Ok(Envelope::ok(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<()>> {
    let mut project = find_active(state.projects.as_ref(), &raw_id)
        .await?
        .ok_or_else(|| not_found(raw_id.clone()))?;

    project.deactivate();
    state
        .projects
        .update(&project)
        .await?
        .ok_or_else(|| not_found(raw_id))?;

    tracing::info!(project_id = project.id, "Project soft-deleted");
    Ok(Envelope::with_message(StatusCode::OK, "Deleted project.", ()))
}

/// Look up an active project by its path id. Ids that are not integers
/// simply match nothing.
async fn find_active(store: &dyn ProjectStore, raw_id: &str) -> AppResult<Option<Project>> {
    let Ok(id) = raw_id.parse::<DbId>() else {
        return Ok(None);
    };
    Ok(store.find_by_id(id).await?.filter(|p| p.is_active))
}

/// Apply an upsert for `user`.
///
/// An active project with the submitted id is updated in place. Anything
/// else (null id, unknown id, soft-deleted project) inserts a new project
/// whose id the store assigns. `None` means the update found no row to write.
async fn add_or_update(
    store: &dyn ProjectStore,
    input: &UpsertProject,
    user: DbId,
) -> Result<Option<Project>, sqlx::Error> {
    let existing = match input.id {
        Some(id) => store.find_by_id(id).await?.filter(|p| p.is_active),
        None => None,
    };
    let now = Utc::now();

    match existing {
        Some(mut project) => {
            project.touch(&input.name, user, now);
            let saved = store.update(&project).await?;
            if let Some(saved) = &saved {
                tracing::info!(project_id = saved.id, user_id = user, "Project updated");
            }
            Ok(saved)
        }
        None => {
            let created = store.insert(&NewProject::new(&input.name, user, now)).await?;
            tracing::info!(
                project_id = created.id,
                requested_id = ?input.id,
                user_id = user,
                "Project created"
            );
            Ok(Some(created))
        }
    }
}

/// Decode the request body. Empty bodies and invalid JSON both yield `null`.
fn decode_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "Project payload is not valid JSON");
        Value::Null
    })
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
