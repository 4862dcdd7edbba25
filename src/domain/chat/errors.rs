//! Chat-specific error types.

use crate::domain::foundation::{ChatSessionId, CounselorId, DomainError, ErrorCode};

/// Chat-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Session does not exist or belongs to another user.
    NotFound(ChatSessionId),
    /// Message was empty or whitespace only.
    EmptyMessage,
    /// Message exceeded the configured length.
    MessageTooLong { max: usize, actual: usize },
    /// Session referenced an unknown counselor.
    UnknownCounselor(CounselorId),
    /// Stored session changed between read and write.
    Conflict(ChatSessionId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ChatError {
    pub fn not_found(id: ChatSessionId) -> Self {
        ChatError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ChatError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ChatError::NotFound(_) => ErrorCode::ChatSessionNotFound,
            ChatError::EmptyMessage
            | ChatError::MessageTooLong { .. }
            | ChatError::UnknownCounselor(_) => ErrorCode::ValidationFailed,
            ChatError::Conflict(_) => ErrorCode::ConcurrentModification,
            ChatError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ChatError::NotFound(id) => format!("Chat session not found: {}", id),
            ChatError::EmptyMessage => "Message cannot be empty".to_string(),
            ChatError::MessageTooLong { max, actual } => {
                format!("Message is too long: {} characters (max {})", actual, max)
            }
            ChatError::UnknownCounselor(id) => format!("Unknown counselor: {}", id),
            ChatError::Conflict(id) => {
                format!("Chat session {} was modified concurrently, retry", id)
            }
            ChatError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Maps a port error, recognising lost conditional writes.
    pub fn from_domain(id: ChatSessionId, err: DomainError) -> Self {
        if err.is_conflict() {
            ChatError::Conflict(id)
        } else {
            ChatError::Infrastructure(err.to_string())
        }
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ChatError {}

impl From<DomainError> for ChatError {
    fn from(err: DomainError) -> Self {
        ChatError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_categories() {
        let id = ChatSessionId::new();
        assert_eq!(ChatError::not_found(id).code(), ErrorCode::ChatSessionNotFound);
        assert_eq!(ChatError::EmptyMessage.code(), ErrorCode::ValidationFailed);
        assert_eq!(
            ChatError::Conflict(id).code(),
            ErrorCode::ConcurrentModification
        );
    }

    #[test]
    fn from_domain_detects_conflicts() {
        let id = ChatSessionId::new();
        let conflict = DomainError::new(ErrorCode::ConcurrentModification, "stale");
        assert_eq!(ChatError::from_domain(id, conflict), ChatError::Conflict(id));

        let db = DomainError::database("down");
        assert!(matches!(
            ChatError::from_domain(id, db),
            ChatError::Infrastructure(_)
        ));
    }
}
