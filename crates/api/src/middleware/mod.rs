//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Verifies the bearer token and exposes its claims.
//! - [`permission::RequirePermission`] -- Requires a specific permission in those claims.

pub mod auth;
pub mod permission;
