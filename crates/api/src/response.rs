//! The `{ "code", "message", "data" }` envelope wrapped around every
//! `/api/v1` response.
//!
//! The HTTP status of the response always equals `code`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Uniform response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Envelope::ok(project))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 200 with an empty message.
    pub fn ok(data: T) -> Self {
        Self::with_message(StatusCode::OK, String::new(), data)
    }

    pub fn with_message(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
