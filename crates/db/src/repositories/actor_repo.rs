//! Repository for the `actors` table.

use casting_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, CreateActor, UpdateActor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, gender";

/// Name of the unique constraint on `actors.name`.
pub const NAME_CONSTRAINT: &str = "uq_actors_name";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, age, gender)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .fetch_one(pool)
            .await
    }

    /// Find an actor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an actor by exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE name = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List every actor, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id ASC");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Total number of actors.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM actors")
            .fetch_one(pool)
            .await
    }

    /// Update an actor. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .fetch_optional(pool)
            .await
    }

    /// Delete an actor by ID. Returns `true` if a row was removed.
    ///
    /// Casting rows referencing the actor are removed by the foreign key cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
