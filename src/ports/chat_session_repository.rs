//! Chat session repository port.
//!
//! Sessions are stored whole: the message list travels with the aggregate.

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{ChatSessionId, DomainError, UserId};
use async_trait::async_trait;

/// Repository port for ChatSession aggregate persistence.
#[async_trait]
pub trait ChatSessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError>;

    /// Replace a stored session, but only if it still holds
    /// `expected_message_count` messages.
    ///
    /// # Errors
    ///
    /// - `ChatSessionNotFound` if the session doesn't exist
    /// - `ConcurrentModification` if the stored message count differs
    /// - `DatabaseError` on persistence failure
    async fn update(
        &self,
        session: &ChatSession,
        expected_message_count: usize,
    ) -> Result<(), DomainError>;

    /// Find a session by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ChatSessionId) -> Result<Option<ChatSession>, DomainError>;

    /// Find all sessions owned by a user, most recently updated first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError>;
}
