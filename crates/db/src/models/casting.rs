//! Casting association model.
//!
//! Links actors to movies. No API endpoint reads or writes it; the table
//! exists so the schema can express the relationship.

use casting_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `castings` table. `(actor_id, movie_id)` is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Casting {
    pub actor_id: DbId,
    pub movie_id: DbId,
}
