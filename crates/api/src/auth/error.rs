//! Authorization failures.
//!
//! Every failure carries a machine-readable `code`, a human `description`,
//! and the HTTP status it maps to. The code strings are part of the public
//! contract; clients match on them.

use axum::http::StatusCode;
use serde::Serialize;

/// Machine-readable authorization failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthErrorCode {
    #[serde(rename = "authorization_header_missing")]
    HeaderMissing,
    #[serde(rename = "invalid_header")]
    InvalidHeader,
    #[serde(rename = "token_expired")]
    TokenExpired,
    #[serde(rename = "invalid_claims")]
    InvalidClaims,
    /// The token verified but has no `permissions` claim.
    ///
    /// The misspelling is what existing clients expect.
    #[serde(rename = "invaild_claim")]
    PermissionsMissing,
    #[serde(rename = "Forbidden")]
    Forbidden,
}

impl AuthErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeaderMissing => "authorization_header_missing",
            Self::InvalidHeader => "invalid_header",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims => "invalid_claims",
            Self::PermissionsMissing => "invaild_claim",
            Self::Forbidden => "Forbidden",
        }
    }
}

/// An authorization failure, rendered as `{code, description}` in the
/// response `message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description} ({})", .code.as_str())]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub description: &'static str,
    pub status: StatusCode,
}

impl AuthError {
    const fn new(code: AuthErrorCode, description: &'static str, status: StatusCode) -> Self {
        Self {
            code,
            description,
            status,
        }
    }

    pub const fn header_missing() -> Self {
        Self::new(
            AuthErrorCode::HeaderMissing,
            "Authorization header is expected",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub const fn not_bearer() -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            "Authorization must start with 'Bearer'.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub const fn not_single_token() -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            "Authorization header must be a bearer token",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub const fn malformed() -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            "Authorization malformed.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub const fn key_not_found() -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            "Unable to find the appropriate key.",
            StatusCode::BAD_REQUEST,
        )
    }

    pub const fn expired() -> Self {
        Self::new(
            AuthErrorCode::TokenExpired,
            "Token expired.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub const fn invalid_claims() -> Self {
        Self::new(
            AuthErrorCode::InvalidClaims,
            "Incorrect claims. Please, check the audience and issuer.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub const fn unparseable() -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            "Unable to parse authentication token.",
            StatusCode::BAD_REQUEST,
        )
    }

    pub const fn permissions_missing() -> Self {
        Self::new(
            AuthErrorCode::PermissionsMissing,
            "permissions not in JWT",
            StatusCode::BAD_REQUEST,
        )
    }

    pub const fn forbidden() -> Self {
        Self::new(
            AuthErrorCode::Forbidden,
            "permission not found",
            StatusCode::FORBIDDEN,
        )
    }
}
