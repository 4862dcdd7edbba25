//! Error type shared by the simple owner-scoped record modules
//! (moods, journal entries, counselors, achievements).

use super::{DomainError, ErrorCode, ValidationError};
use thiserror::Error;

/// Errors for record create/read/update/delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Record missing or owned by another user.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Input rejected before any side effect.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failed.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl RecordError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        RecordError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RecordError::NotFound { .. } => ErrorCode::NotFound,
            RecordError::Validation(_) => ErrorCode::ValidationFailed,
            RecordError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for RecordError {
    fn from(err: DomainError) -> Self {
        RecordError::Infrastructure(err.to_string())
    }
}
