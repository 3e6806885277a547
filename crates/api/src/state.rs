use std::sync::Arc;

use crate::auth::jwt::TokenVerifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: casting_db::DbPool,
    /// Bearer-token verifier shared by the authorization extractors.
    pub verifier: Arc<TokenVerifier>,
}
