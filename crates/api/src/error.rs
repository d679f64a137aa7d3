use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use keel_core::error::CoreError;
use serde_json::{json, Value};

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and sqlx errors from the store.
/// Implements [`IntoResponse`] to produce the standard envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `keel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, data) = match self {
            // Every modeled failure is reported as 401.
            AppError::Core(core) => {
                let message = core.to_string();
                let data = match core {
                    CoreError::NotFound { entity, id } => {
                        tracing::debug!(entity, %id, "Entity not found");
                        Value::Null
                    }
                    CoreError::Validation(violation) => Value::Object(violation.parameters),
                    CoreError::NoneFound { .. }
                    | CoreError::EmptyPayload
                    | CoreError::PersistenceFailure { .. } => json!([]),
                    CoreError::Unauthorized(_) => Value::Null,
                };
                (StatusCode::UNAUTHORIZED, message, data)
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    Value::Null,
                )
            }
        };

        Envelope::with_message(status, message, data).into_response()
    }
}
