//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::error::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Caller identity extracted from a verified bearer token.
///
/// Prefer [`RequirePermission`](super::permission::RequirePermission) in
/// handlers; this extractor only authenticates.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity-provider subject, when the token carries one.
    pub subject: Option<String>,
    /// Granted permissions. `None` when the token has no `permissions` claim.
    pub permissions: Option<Vec<String>>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            None => None,
            Some(value) => Some(value.to_str().map_err(|_| AuthError::not_bearer())?),
        };
        let token = bearer_token(header)?;

        let claims = state.verifier.verify(token).await?;

        Ok(AuthUser {
            subject: claims.sub,
            permissions: claims.permissions,
        })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively and any run of whitespace
/// separates it from the token.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or_else(AuthError::header_missing)?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    let Some(scheme) = parts.first() else {
        return Err(AuthError::header_missing());
    };
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::not_bearer());
    }
    if parts.len() != 2 {
        return Err(AuthError::not_single_token());
    }
    Ok(parts[1])
}
