use thiserror::Error;

use crate::shared::metadata::ValidationError;

/// Failures of entity store operations. All of them are local and recoverable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Update/delete target is missing; the UI treats this as a no-op
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Field messages when this is a validation failure
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            StoreError::NotFound { .. } => None,
        }
    }
}
