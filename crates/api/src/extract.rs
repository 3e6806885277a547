//! Request extractors and body parsing shared by the entity handlers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use casting_core::error::CoreError;
use casting_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Numeric `{id}` path segment.
///
/// A segment that is not an integer means no route matched, so the rejection
/// is a plain 404 rather than axum's 400.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        Ok(EntityId(id))
    }
}

/// Parse and validate a JSON request body into `T`.
///
/// - empty body, invalid JSON, or a literal `null` -> 400
/// - JSON that does not fit `T`, or fails validation -> 422
///
/// The `Content-Type` header is not inspected.
pub fn parse_body<T>(body: &[u8]) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let value = parse_json(body)?;

    let input: T = serde_json::from_value(value)
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    Ok(input)
}

fn parse_json(body: &[u8]) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("request body is empty".into()));
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Err(AppError::BadRequest("request body is null".into())),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::BadRequest(format!("invalid JSON: {e}"))),
    }
}
