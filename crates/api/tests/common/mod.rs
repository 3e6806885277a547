#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use casting_api::auth::jwks::StaticKeySource;
use casting_api::auth::jwt::{AuthConfig, TokenVerifier};
use casting_api::config::ServerConfig;
use casting_api::router::build_app_router;
use casting_api::state::AppState;

const PRIVATE_KEY: &str = include_str!("../fixtures/test_rsa_key.pem");
const JWKS: &str = include_str!("../fixtures/jwks.json");

pub const KID: &str = "test-key-1";
pub const DOMAIN: &str = "casting.test";
pub const AUDIENCE: &str = "casting-api";

/// Every permission the API knows about (an executive producer).
pub const ALL_PERMISSIONS: [&str; 8] = casting_core::permissions::ALL;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            domain: DOMAIN.to_string(),
            audience: AUDIENCE.to_string(),
            algorithms: vec![Algorithm::RS256],
            jwks_cache_ttl: None,
        },
    }
}

/// Build the full application router over `pool`.
///
/// Uses the same [`build_app_router`] as the binary; only the key source
/// differs (the fixture key set instead of the identity provider).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let keys: JwkSet = serde_json::from_str(JWKS).expect("fixture JWKS should parse");
    let verifier = TokenVerifier::new(&config.auth, Arc::new(StaticKeySource::new(keys)));

    let state = AppState {
        pool,
        verifier: Arc::new(verifier),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Sign `claims` with the fixture key under `kid`.
pub fn sign(kid: &str, claims: &Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());
    let key = EncodingKey::from_rsa_pem(PRIVATE_KEY.as_bytes()).expect("fixture key");
    encode(&header, claims, &key).expect("token should sign")
}

/// Standard claims valid for an hour, without a `permissions` claim.
pub fn base_claims() -> Value {
    let now = chrono::Utc::now().timestamp();
    json!({
        "sub": "auth0|casting-test",
        "iss": format!("https://{DOMAIN}/"),
        "aud": AUDIENCE,
        "iat": now,
        "exp": now + 3600,
    })
}

/// A valid token granting exactly `permissions`.
pub fn token_with(permissions: &[&str]) -> String {
    let mut claims = base_claims();
    claims["permissions"] = json!(permissions);
    sign(KID, &claims)
}

/// A valid token granting everything.
pub fn admin_token() -> String {
    token_with(&ALL_PERMISSIONS)
}

/// A valid token whose payload has no `permissions` claim at all.
pub fn token_without_permissions() -> String {
    sign(KID, &base_claims())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send a request with an optional bearer token and optional raw body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(body) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Send a request with a verbatim `Authorization` header value.
pub async fn send_with_header(
    app: Router,
    method: Method,
    uri: &str,
    authorization: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", authorization)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body.to_string())).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an actor directly, returning its id.
pub async fn seed_actor(pool: &PgPool, name: &str, age: i32, gender: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3) RETURNING id")
        .bind(name)
        .bind(age)
        .bind(gender)
        .fetch_one(pool)
        .await
        .expect("actor should insert")
}

/// Insert a movie directly, returning its id. `release_date` is `YYYY-MM-DD`.
pub async fn seed_movie(pool: &PgPool, title: &str, release_date: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO movies (title, release_date) VALUES ($1, $2::date) RETURNING id",
    )
    .bind(title)
    .bind(release_date)
    .fetch_one(pool)
    .await
    .expect("movie should insert")
}
