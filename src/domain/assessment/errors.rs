//! Assessment-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};
use thiserror::Error;

/// Errors raised while scoring or storing an SRQ-29 assessment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Answer payload was not a JSON array.
    #[error("answers must be an array of booleans")]
    NotAnArray,

    /// Wrong number of answers.
    #[error("expected {expected} answers, got {actual}")]
    InvalidAnswerCount { expected: usize, actual: usize },

    /// An element of the answer array was not a boolean.
    #[error("answer at index {index} must be a boolean")]
    NonBooleanAnswer { index: usize },

    /// Persistence failed.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AssessmentError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotAnArray
            | AssessmentError::InvalidAnswerCount { .. }
            | AssessmentError::NonBooleanAnswer { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns true for errors caused by the client's input.
    pub fn is_validation(&self) -> bool {
        self.code() == ErrorCode::ValidationFailed
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        AssessmentError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_validation_failures() {
        assert!(AssessmentError::NotAnArray.is_validation());
        assert!(AssessmentError::NonBooleanAnswer { index: 0 }.is_validation());
        assert!(!AssessmentError::infrastructure("db down").is_validation());
    }

    #[test]
    fn count_error_message_names_both_counts() {
        let err = AssessmentError::InvalidAnswerCount {
            expected: 29,
            actual: 28,
        };
        assert_eq!(err.to_string(), "expected 29 answers, got 28");
    }
}
