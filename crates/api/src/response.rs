//! Shared response envelope types for API handlers.
//!
//! Every body carries a `success` flag. Failures use [`ErrorResponse`]:
//!
//! ```json
//! {"success": false, "error": 404, "message": "resource not found"}
//! ```
//!
//! Authorization failures and conflicts replace the message string with a
//! `{code, description}` object.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use casting_core::types::DbId;
use serde::Serialize;

/// `{ "success": true, "created": id }` returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: DbId,
}

impl CreatedResponse {
    pub fn new(created: DbId) -> Self {
        Self {
            success: true,
            created,
        }
    }
}

/// `{ "success": true, "deleted": id }` returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: DbId,
}

impl DeletedResponse {
    pub fn new(deleted: DbId) -> Self {
        Self {
            success: true,
            deleted,
        }
    }
}

/// The `message` member of an error body.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(&'static str),
    Detail {
        code: &'static str,
        description: String,
    },
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: ErrorMessage,
}

impl ErrorResponse {
    /// Error body with the fixed message for `status`.
    pub fn for_status(status: StatusCode) -> Self {
        Self::with_message(status, ErrorMessage::Text(status_message(status)))
    }

    pub fn with_message(status: StatusCode, message: ErrorMessage) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }

    /// Render as a response with the matching status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Fixed human-readable message for framework-level failures.
pub fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::REQUEST_TIMEOUT => "request timeout",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}
