//! Movie entity model and DTOs.

use casting_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A movie row from the `movies` table.
///
/// `release_date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: Date,
}

/// DTO for creating a new movie.
///
/// Dates are accepted with or without zero padding (`2020-8-12`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1))]
    pub title: String,
    pub release_date: Date,
}

/// DTO for updating an existing movie. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub release_date: Option<Date>,
}
