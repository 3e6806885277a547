//! Permission-checking extractor.
//!
//! Each handler names the permission it needs in its signature:
//!
//! ```ignore
//! async fn list(_auth: RequirePermission<GetActors>, ...) -> AppResult<...>
//! ```
//!
//! The extractor authenticates the caller via [`AuthUser`] and then checks
//! the `permissions` claim. Both steps finish before the handler body runs,
//! so a rejected request never touches the database.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use casting_core::permissions;

use super::auth::AuthUser;
use crate::auth::error::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// A permission a route can require.
pub trait Permission: Send + Sync + 'static {
    const NAME: &'static str;
}

macro_rules! permission_markers {
    ($($(#[$meta:meta])* $marker:ident => $name:path;)*) => {
        $(
            $(#[$meta])*
            pub struct $marker;

            impl Permission for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permission_markers! {
    /// `get:actors`
    GetActors => permissions::GET_ACTORS;
    /// `post:actors`
    PostActors => permissions::POST_ACTORS;
    /// `patch:actors`
    PatchActors => permissions::PATCH_ACTORS;
    /// `delete:actors`
    DeleteActors => permissions::DELETE_ACTORS;
    /// `get:movies`
    GetMovies => permissions::GET_MOVIES;
    /// `post:movies`
    PostMovies => permissions::POST_MOVIES;
    /// `patch:movies`
    PatchMovies => permissions::PATCH_MOVIES;
    /// `delete:movies`
    DeleteMovies => permissions::DELETE_MOVIES;
}

/// Requires permission `P`. Rejects with 400 when the token has no
/// `permissions` claim and 403 when `P` is not among them.
pub struct RequirePermission<P: Permission> {
    pub user: AuthUser,
    _permission: PhantomData<P>,
}

impl<P: Permission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        check_permission(&user, P::NAME)?;
        Ok(RequirePermission {
            user,
            _permission: PhantomData,
        })
    }
}

/// Check that `user` was granted `required`.
pub fn check_permission(user: &AuthUser, required: &str) -> Result<(), AuthError> {
    let granted = user
        .permissions
        .as_deref()
        .ok_or_else(AuthError::permissions_missing)?;

    if !permissions::is_granted(granted, required) {
        tracing::debug!(
            subject = user.subject.as_deref().unwrap_or("-"),
            required,
            "Permission denied"
        );
        return Err(AuthError::forbidden());
    }
    Ok(())
}
