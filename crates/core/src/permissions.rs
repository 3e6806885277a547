//! Well-known permission names.
//!
//! These must match the permissions granted by the identity provider's API
//! configuration; tokens carry them in the `permissions` claim.

pub const GET_ACTORS: &str = "get:actors";
pub const POST_ACTORS: &str = "post:actors";
pub const PATCH_ACTORS: &str = "patch:actors";
pub const DELETE_ACTORS: &str = "delete:actors";

pub const GET_MOVIES: &str = "get:movies";
pub const POST_MOVIES: &str = "post:movies";
pub const PATCH_MOVIES: &str = "patch:movies";
pub const DELETE_MOVIES: &str = "delete:movies";

/// Every permission the API knows about.
pub const ALL: [&str; 8] = [
    GET_ACTORS,
    POST_ACTORS,
    PATCH_ACTORS,
    DELETE_ACTORS,
    GET_MOVIES,
    POST_MOVIES,
    PATCH_MOVIES,
    DELETE_MOVIES,
];

/// Whether `granted` contains `required`. Comparison is exact and
/// case-sensitive.
pub fn is_granted<S: AsRef<str>>(granted: &[S], required: &str) -> bool {
    granted.iter().any(|p| p.as_ref() == required)
}
