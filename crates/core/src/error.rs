use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A row with the same unique key already exists.
    ///
    /// `entity` is the lowercase singular name (`"actor"`, `"movie"`) and ends
    /// up verbatim in the client-facing description.
    #[error("Conflict: {entity} already exists in database")]
    Conflict { entity: &'static str },
}
