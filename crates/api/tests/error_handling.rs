//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use casting_api::auth::error::AuthError;
use casting_api::auth::jwks::JwksError;
use casting_api::error::AppError;
use casting_core::error::CoreError;
use http_body_util::BodyExt;
use serde_json::json;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_hides_entity_details() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Actor",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn validation_error_returns_422() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("age: range".into()))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn conflict_returns_409_with_detail() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Conflict { entity: "actor" })).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json,
        json!({
            "success": false,
            "error": 409,
            "message": {"code": "Conflict", "description": "actor already exists in database"}
        })
    );
}

#[tokio::test]
async fn bad_request_message_is_fixed() {
    let (status, json) = error_to_response(AppError::BadRequest("invalid JSON".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "bad request");
}

#[tokio::test]
async fn method_not_allowed_returns_405() {
    let (status, json) = error_to_response(AppError::MethodNotAllowed).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], 405);
    assert_eq!(json["message"], "method not allowed");
}

#[tokio::test]
async fn auth_error_uses_its_own_status() {
    let (status, json) = error_to_response(AppError::Auth(AuthError::forbidden())).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"]["code"], "Forbidden");
    assert_eq!(json["message"]["description"], "permission not found");
}

#[tokio::test]
async fn key_set_failure_is_internal() {
    let err = JwksError::Status {
        status: reqwest::StatusCode::BAD_GATEWAY,
    };
    let (status, json) = error_to_response(AppError::KeySet(err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "internal server error");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_database_errors_do_not_leak() {
    let (status, json) =
        error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "internal server error");
}
