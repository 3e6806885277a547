use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET    /movies        -> list
/// POST   /movies        -> create
/// PATCH  /movies/{id}   -> update
/// DELETE /movies/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list).post(movie::create))
        .route("/movies/{id}", patch(movie::update).delete(movie::delete))
}
