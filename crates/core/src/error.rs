use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by key found nothing.
    #[error("{entity} not found with {field}: {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: DbId,
    },

    /// An invariant violation that is not a missing resource.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// `NotFound` for the common case of a lookup by primary key.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            field: "id",
            value: id,
        }
    }
}
