pub mod actor;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy:
///
/// ```text
/// /actors                 list (get:actors), create (post:actors)
/// /actors/{id}            update (patch:actors), delete (delete:actors)
///
/// /movies                 list (get:movies), create (post:movies)
/// /movies/{id}            update (patch:movies), delete (delete:movies)
/// ```
///
/// Routes are merged rather than nested so every path, including the bare
/// collection paths, shares the router's method-not-allowed fallback.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(actor::router())
        .merge(movie::router())
}
