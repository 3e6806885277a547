use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Actor routes.
///
/// ```text
/// GET    /actors        -> list
/// POST   /actors        -> create
/// PATCH  /actors/{id}   -> update
/// DELETE /actors/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actors", get(actor::list).post(actor::create))
        .route("/actors/{id}", patch(actor::update).delete(actor::delete))
}
