use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use casting_core::error::CoreError;

use crate::auth::error::AuthError;
use crate::auth::jwks::JwksError;
use crate::auth::jwt::VerifyError;
use crate::response::{ErrorMessage, ErrorResponse};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`AuthError`] for authorization
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `casting_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request failed authorization.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The signing-key set could not be obtained.
    #[error(transparent)]
    KeySet(#[from] JwksError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Missing or unparseable request body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A mutating operation failed on otherwise well-formed input.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// No route matches the request path.
    #[error("Route not found")]
    NotFound,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Downgrade a persistence failure during a mutation to 422.
    pub fn unprocessable(err: sqlx::Error) -> Self {
        tracing::warn!(error = %err, "Mutation failed");
        AppError::Unprocessable(err.to_string())
    }
}

impl From<VerifyError> for AppError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Rejected(auth) => AppError::Auth(auth),
            VerifyError::KeySet(jwks) => AppError::KeySet(jwks),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => text(StatusCode::NOT_FOUND),
                CoreError::Validation(_) => text(StatusCode::UNPROCESSABLE_ENTITY),
                CoreError::Conflict { entity } => (
                    StatusCode::CONFLICT,
                    ErrorMessage::Detail {
                        code: "Conflict",
                        description: format!("{entity} already exists in database"),
                    },
                ),
            },

            // --- Authorization ---
            AppError::Auth(auth) => (
                auth.status,
                ErrorMessage::Detail {
                    code: auth.code.as_str(),
                    description: auth.description.to_string(),
                },
            ),
            AppError::KeySet(err) => {
                tracing::error!(error = %err, "Unable to obtain JWK set");
                text(StatusCode::INTERNAL_SERVER_ERROR)
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(_) => text(StatusCode::BAD_REQUEST),
            AppError::Unprocessable(_) => text(StatusCode::UNPROCESSABLE_ENTITY),
            AppError::NotFound => text(StatusCode::NOT_FOUND),
            AppError::MethodNotAllowed => text(StatusCode::METHOD_NOT_ALLOWED),
        };

        ErrorResponse::with_message(status, message).into_response_with(status)
    }
}

fn text(status: StatusCode) -> (StatusCode, ErrorMessage) {
    (
        status,
        ErrorMessage::Text(crate::response::status_message(status)),
    )
}

/// Classify a sqlx error that reached the boundary untranslated.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500; details are logged, never returned.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, ErrorMessage) {
    match err {
        sqlx::Error::RowNotFound => text(StatusCode::NOT_FOUND),
        other => {
            tracing::error!(error = %other, "Database error");
            text(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
