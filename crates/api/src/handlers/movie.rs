//! Handlers for the `/movies` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::pagination::paginate;
use casting_core::types::DbId;
use casting_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use casting_db::repositories::movie_repo::TITLE_CONSTRAINT;
use casting_db::repositories::MovieRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_body, EntityId};
use crate::middleware::permission::{
    DeleteMovies, GetMovies, PatchMovies, PostMovies, RequirePermission,
};
use crate::query::Page;
use crate::response::{CreatedResponse, DeletedResponse};
use crate::state::AppState;

const ENTITY: &str = "movie";

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
    pub movies_count: i64,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub success: bool,
    pub movie: Movie,
}

/// GET /movies?page=N
pub async fn list(
    State(state): State<AppState>,
    _auth: RequirePermission<GetMovies>,
    Page(page): Page,
) -> AppResult<Json<MovieListResponse>> {
    let all = MovieRepo::list(&state.pool).await?;
    let movies_count = MovieRepo::count(&state.pool).await?;

    Ok(Json(MovieListResponse {
        success: true,
        movies: paginate(all, page),
        movies_count,
    }))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    _auth: RequirePermission<PostMovies>,
    body: Bytes,
) -> AppResult<Json<CreatedResponse>> {
    let input: CreateMovie = parse_body(&body)?;

    if MovieRepo::find_by_title(&state.pool, &input.title)
        .await
        .map_err(AppError::unprocessable)?
        .is_some()
    {
        return Err(CoreError::Conflict { entity: ENTITY }.into());
    }

    let movie = MovieRepo::create(&state.pool, &input)
        .await
        .map_err(|e| {
            if casting_db::is_unique_violation(&e, Some(TITLE_CONSTRAINT)) {
                AppError::Core(CoreError::Conflict { entity: ENTITY })
            } else {
                AppError::unprocessable(e)
            }
        })?;

    tracing::info!(movie_id = movie.id, "Movie created");
    Ok(Json(CreatedResponse::new(movie.id)))
}

/// PATCH /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    _auth: RequirePermission<PatchMovies>,
    body: Bytes,
) -> AppResult<Json<MovieResponse>> {
    if MovieRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    let input: UpdateMovie = parse_body(&body)?;

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::unprocessable)?
        .ok_or(not_found(id))?;

    Ok(Json(MovieResponse {
        success: true,
        movie,
    }))
}

/// DELETE /movies/{id}
///
/// Castings of the movie go with it.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    _auth: RequirePermission<DeleteMovies>,
) -> AppResult<Json<DeletedResponse>> {
    if MovieRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(Json(DeletedResponse::new(id)))
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id,
    })
}
