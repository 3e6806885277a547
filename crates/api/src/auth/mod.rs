//! Authentication and authorization primitives.
//!
//! - [`error`] -- Authorization failure codes and their HTTP statuses.
//! - [`jwks`] -- Key sources for signature verification (remote JWKS, static set).
//! - [`jwt`] -- Token verification and identity-provider configuration.

pub mod error;
pub mod jwks;
pub mod jwt;
