//! Handlers for the `/actors` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::pagination::paginate;
use casting_core::types::DbId;
use casting_db::models::actor::{Actor, CreateActor, UpdateActor};
use casting_db::repositories::actor_repo::NAME_CONSTRAINT;
use casting_db::repositories::ActorRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_body, EntityId};
use crate::middleware::permission::{
    DeleteActors, GetActors, PatchActors, PostActors, RequirePermission,
};
use crate::query::Page;
use crate::response::{CreatedResponse, DeletedResponse};
use crate::state::AppState;

/// Entity name used in conflict descriptions.
const ENTITY: &str = "actor";

#[derive(Debug, Serialize)]
pub struct ActorListResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
    pub actors_count: i64,
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub success: bool,
    pub actor: Actor,
}

/// GET /actors?page=N
pub async fn list(
    State(state): State<AppState>,
    _auth: RequirePermission<GetActors>,
    Page(page): Page,
) -> AppResult<Json<ActorListResponse>> {
    let all = ActorRepo::list(&state.pool).await?;
    let actors_count = ActorRepo::count(&state.pool).await?;

    Ok(Json(ActorListResponse {
        success: true,
        actors: paginate(all, page),
        actors_count,
    }))
}

/// POST /actors
///
/// Names are unique. A duplicate is reported as 409 whether it is caught by
/// the lookup or by the constraint during the insert.
pub async fn create(
    State(state): State<AppState>,
    _auth: RequirePermission<PostActors>,
    body: Bytes,
) -> AppResult<Json<CreatedResponse>> {
    let input: CreateActor = parse_body(&body)?;

    let existing = ActorRepo::find_by_name(&state.pool, &input.name)
        .await
        .map_err(AppError::unprocessable)?;
    if existing.is_some() {
        return Err(CoreError::Conflict { entity: ENTITY }.into());
    }

    let actor = ActorRepo::create(&state.pool, &input).await.map_err(|e| {
        if casting_db::is_unique_violation(&e, Some(NAME_CONSTRAINT)) {
            AppError::Core(CoreError::Conflict { entity: ENTITY })
        } else {
            AppError::unprocessable(e)
        }
    })?;

    tracing::info!(actor_id = actor.id, "Actor created");
    Ok(Json(CreatedResponse::new(actor.id)))
}

/// PATCH /actors/{id}
///
/// The actor must exist before the body is looked at.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    _auth: RequirePermission<PatchActors>,
    body: Bytes,
) -> AppResult<Json<ActorResponse>> {
    ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;

    let input: UpdateActor = parse_body(&body)?;

    let actor = ActorRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::unprocessable)?
        .ok_or(not_found(id))?;

    Ok(Json(ActorResponse {
        success: true,
        actor,
    }))
}

/// DELETE /actors/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    _auth: RequirePermission<DeleteActors>,
) -> AppResult<Json<DeletedResponse>> {
    ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;

    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(actor_id = id, "Actor deleted");
    Ok(Json(DeletedResponse::new(id)))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Actor", id })
}
