//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::Slot;
use crate::ports::GenerationError;

/// Domain errors - business logic failures.
///
/// Every pipeline stage fails fast with one of these; nothing is retried.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Slot already taken: {0}")]
    SlotTaken(Slot),

    #[error("Copy generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Copy to clipboard failed: {0}")]
    CopyFailed(String),

    #[error("Share failed: {0}")]
    ShareFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: Uuid) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id,
        }
    }

    pub fn agency_not_found(id: Uuid) -> Self {
        DomainError::NotFound {
            entity_type: "Agency",
            id,
        }
    }

    /// Recoverable conditions the caller can retry or route around.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::SlotTaken(_)
                | DomainError::Generation(_)
                | DomainError::CopyFailed(_)
                | DomainError::ShareFailed(_)
        )
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Unique constraint violated: {0}")]
    Duplicate(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
