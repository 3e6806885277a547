//! JSON Web Key Set sources.
//!
//! The token verifier looks keys up by `kid` through the [`KeySource`] trait:
//!
//! - [`RemoteKeySource`] fetches the identity provider's
//!   `/.well-known/jwks.json`, optionally caching it for a fixed TTL.
//! - [`StaticKeySource`] serves a fixed, in-memory set.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use tokio::sync::RwLock;

/// Failure to obtain a key set. Distinct from a key simply not being present.
#[derive(Debug, thiserror::Error)]
pub enum JwksError {
    #[error("failed to fetch JWK set: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JWK set endpoint answered with {status}")]
    Status { status: reqwest::StatusCode },
}

/// Where signature-verification keys come from.
#[async_trait]
pub trait KeySource: Send + Sync {
    /// Return the key whose `kid` matches, or `None` if the set has no such key.
    async fn find(&self, kid: &str) -> Result<Option<Jwk>, JwksError>;
}

/// A fixed key set held in memory.
#[derive(Debug, Clone)]
pub struct StaticKeySource {
    keys: JwkSet,
}

impl StaticKeySource {
    pub fn new(keys: JwkSet) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl KeySource for StaticKeySource {
    async fn find(&self, kid: &str) -> Result<Option<Jwk>, JwksError> {
        Ok(self.keys.find(kid).cloned())
    }
}

struct CachedKeySet {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Key set fetched over HTTP from the identity provider.
///
/// With a TTL, a fetched set is reused until it expires. A `kid` missing from
/// a cached set forces one refetch, so rotated keys are picked up before the
/// TTL runs out. Without a TTL every lookup fetches.
pub struct RemoteKeySource {
    client: reqwest::Client,
    url: String,
    ttl: Option<Duration>,
    cache: RwLock<Option<CachedKeySet>>,
}

impl RemoteKeySource {
    pub fn new(url: impl Into<String>, ttl: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            ttl,
            cache: RwLock::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<JwkSet, JwksError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(JwksError::Status {
                status: response.status(),
            });
        }
        let keys: JwkSet = response.json().await?;
        tracing::debug!(url = %self.url, key_count = keys.keys.len(), "Fetched JWK set");
        Ok(keys)
    }

    async fn cached(&self, kid: &str) -> Option<Jwk> {
        let ttl = self.ttl?;
        let guard = self.cache.read().await;
        let cached = guard.as_ref()?;
        if cached.fetched_at.elapsed() >= ttl {
            return None;
        }
        cached.keys.find(kid).cloned()
    }
}

#[async_trait]
impl KeySource for RemoteKeySource {
    async fn find(&self, kid: &str) -> Result<Option<Jwk>, JwksError> {
        if let Some(jwk) = self.cached(kid).await {
            return Ok(Some(jwk));
        }

        let keys = self.fetch().await?;
        let found = keys.find(kid).cloned();

        if self.ttl.is_some() {
            *self.cache.write().await = Some(CachedKeySet {
                keys,
                fetched_at: Instant::now(),
            });
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    use super::*;

    const JWKS: &str = include_str!("../../tests/fixtures/jwks.json");
    const KID: &str = "test-key-1";

    fn fixture_keys() -> JwkSet {
        serde_json::from_str(JWKS).expect("fixture JWKS should parse")
    }

    /// Serve the fixture key set from an in-process server and count hits.
    async fn serve_jwks(status: StatusCode) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));

        async fn handler(
            State((hits, status)): State<(Arc<AtomicUsize>, StatusCode)>,
        ) -> (StatusCode, Json<JwkSet>) {
            hits.fetch_add(1, Ordering::SeqCst);
            (status, Json(fixture_keys()))
        }

        let app = Router::new()
            .route("/.well-known/jwks.json", get(handler))
            .with_state((Arc::clone(&hits), status));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/.well-known/jwks.json"), hits)
    }

    #[tokio::test]
    async fn static_source_finds_known_kid() {
        let source = StaticKeySource::new(fixture_keys());
        assert!(source.find(KID).await.unwrap().is_some());
        assert!(source.find("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remote_source_without_ttl_fetches_every_time() {
        let (url, hits) = serve_jwks(StatusCode::OK).await;
        let source = RemoteKeySource::new(url, None);

        assert!(source.find(KID).await.unwrap().is_some());
        assert!(source.find(KID).await.unwrap().is_some());

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn remote_source_with_ttl_reuses_cached_set() {
        let (url, hits) = serve_jwks(StatusCode::OK).await;
        let source = RemoteKeySource::new(url, Some(Duration::from_secs(300)));

        for _ in 0..3 {
            assert!(source.find(KID).await.unwrap().is_some());
        }

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_kid_forces_refetch() {
        let (url, hits) = serve_jwks(StatusCode::OK).await;
        let source = RemoteKeySource::new(url, Some(Duration::from_secs(300)));

        assert!(source.find(KID).await.unwrap().is_some());
        assert!(source.find("rotated-away").await.unwrap().is_none());

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (url, _hits) = serve_jwks(StatusCode::SERVICE_UNAVAILABLE).await;
        let source = RemoteKeySource::new(url, None);

        let err = source.find(KID).await.unwrap_err();
        assert!(matches!(
            err,
            JwksError::Status { status } if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
    }
}
