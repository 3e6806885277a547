//! Actor entity model and DTOs.

use casting_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An actor row from the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// DTO for creating a new actor. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0))]
    pub age: i32,
    #[validate(length(min = 1))]
    pub gender: String,
}

/// DTO for updating an existing actor.
///
/// Absent and `null` fields are treated alike: the stored value is kept.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActor {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub age: Option<i32>,
    #[validate(length(min = 1))]
    pub gender: Option<String>,
}
