//! Access-token verification against the identity provider's key set.
//!
//! Tokens are signed by the identity provider (not by this service). A token
//! is accepted when:
//!
//! 1. its header names a `kid` present in the provider's JWK set,
//! 2. the signature verifies with that key under one of the configured
//!    algorithms,
//! 3. `exp`, `aud`, and `iss` are present and valid.
//!
//! Permission checks happen afterwards, per route; see
//! [`crate::middleware::permission`].

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use super::error::AuthError;
use super::jwks::{JwksError, KeySource};

/// Claims this service reads from a verified token.
///
/// `aud`, `iss`, and `exp` are checked by the verifier and not kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject, the identity provider's user id.
    #[serde(default)]
    pub sub: Option<String>,
    /// Granted permissions. `None` when the claim is absent altogether.
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// Identity-provider settings for token verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Identity-provider tenant domain, e.g. `casting.eu.auth0.com`.
    pub domain: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Signature algorithms a token may use.
    pub algorithms: Vec<Algorithm>,
    /// How long a fetched JWK set is reused. `None` fetches on every request.
    pub jwks_cache_ttl: Option<Duration>,
}

/// Default JWK set cache lifetime in seconds.
const DEFAULT_JWKS_CACHE_TTL_SECS: u64 = 300;

impl AuthConfig {
    /// Load identity-provider configuration from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `AUTH0_DOMAIN`        | **yes**  | --      |
    /// | `API_AUDIENCE`        | **yes**  | --      |
    /// | `ALGORITHMS`          | no       | `RS256` |
    /// | `JWKS_CACHE_TTL_SECS` | no       | `300`   |
    ///
    /// `ALGORITHMS` is comma-separated. A TTL of `0` disables caching.
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a value does not parse.
    pub fn from_env() -> Self {
        let domain =
            std::env::var("AUTH0_DOMAIN").expect("AUTH0_DOMAIN must be set in the environment");
        assert!(!domain.is_empty(), "AUTH0_DOMAIN must not be empty");

        let audience =
            std::env::var("API_AUDIENCE").expect("API_AUDIENCE must be set in the environment");

        let algorithms = parse_algorithms(
            &std::env::var("ALGORITHMS").unwrap_or_else(|_| "RS256".into()),
        )
        .unwrap_or_else(|e| panic!("ALGORITHMS is invalid: {e}"));

        let ttl_secs: u64 = std::env::var("JWKS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_JWKS_CACHE_TTL_SECS.to_string())
            .parse()
            .expect("JWKS_CACHE_TTL_SECS must be a valid u64");

        Self {
            domain,
            audience,
            algorithms,
            jwks_cache_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
        }
    }

    /// Expected `iss` claim: `https://<domain>/`.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    /// Where the provider publishes its signing keys.
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }
}

/// Parse a comma-separated algorithm list such as `"RS256, RS384"`.
pub fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>, String> {
    let algorithms = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Algorithm>()
                .map_err(|_| format!("unknown algorithm '{s}'"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if algorithms.is_empty() {
        return Err("at least one algorithm is required".into());
    }
    Ok(algorithms)
}

/// Why a token was not accepted.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The token itself is unacceptable.
    #[error(transparent)]
    Rejected(#[from] AuthError),
    /// The key set could not be obtained, so the token could not be judged.
    #[error(transparent)]
    KeySet(#[from] JwksError),
}

/// Verifies bearer tokens against a [`KeySource`].
pub struct TokenVerifier {
    keys: Arc<dyn KeySource>,
    audience: String,
    issuer: String,
    algorithms: Vec<Algorithm>,
}

impl TokenVerifier {
    /// # Panics
    ///
    /// Panics if `config.algorithms` is empty.
    pub fn new(config: &AuthConfig, keys: Arc<dyn KeySource>) -> Self {
        assert!(
            !config.algorithms.is_empty(),
            "at least one token algorithm must be allowed"
        );
        Self {
            keys,
            audience: config.audience.clone(),
            issuer: config.issuer(),
            algorithms: config.algorithms.clone(),
        }
    }

    /// Verify `token` and return its claims.
    pub async fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let header = decode_header(token).map_err(|_| AuthError::malformed())?;
        let kid = header.kid.ok_or_else(AuthError::malformed)?;

        // Validation only accepts algorithms of one key family, so it is built
        // for the token's own algorithm once that is known to be allowed.
        if !self.algorithms.contains(&header.alg) {
            tracing::debug!(alg = ?header.alg, "Token algorithm not allowed");
            return Err(AuthError::unparseable().into());
        }

        let jwk = self
            .keys
            .find(&kid)
            .await?
            .ok_or_else(AuthError::key_not_found)?;

        let key = DecodingKey::from_jwk(&jwk).map_err(|_| AuthError::unparseable())?;

        let mut validation = Validation::new(header.alg);
        validation.leeway = 0;
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let data = decode::<Claims>(token, &key, &validation).map_err(|e| {
            tracing::debug!(error = %e, kid = %kid, "Token rejected");
            classify(e.kind())
        })?;

        Ok(data.claims)
    }
}

fn classify(kind: &ErrorKind) -> AuthError {
    match kind {
        ErrorKind::ExpiredSignature => AuthError::expired(),
        ErrorKind::InvalidAudience
        | ErrorKind::InvalidIssuer
        | ErrorKind::ImmatureSignature
        | ErrorKind::MissingRequiredClaim(_) => AuthError::invalid_claims(),
        _ => AuthError::unparseable(),
    }
}
