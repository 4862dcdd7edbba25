//! Chat session aggregate.
//!
//! A session holds an append-only list of messages between one user and
//! either the AI counselor (no counselor assigned) or a human counselor.

use serde::{Deserialize, Serialize};

use super::{ChatError, ChatMessage};
use crate::domain::foundation::{ChatSessionId, CounselorId, Timestamp, UserId};

/// Default cap on message length, in characters.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 4000;

/// Chat session aggregate.
///
/// # Invariants
///
/// - `messages` only grows; existing messages are never changed or removed
/// - `updated_at` strictly advances on every append
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    id: ChatSessionId,
    user_id: UserId,
    counselor_id: Option<CounselorId>,
    messages: Vec<ChatMessage>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ChatSession {
    /// Starts an empty session. `None` for `counselor_id` makes it an AI session.
    pub fn new(user_id: UserId, counselor_id: Option<CounselorId>) -> Self {
        let now = Timestamp::now();
        Self {
            id: ChatSessionId::new(),
            user_id,
            counselor_id,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: ChatSessionId,
        user_id: UserId,
        counselor_id: Option<CounselorId>,
        messages: Vec<ChatMessage>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            counselor_id,
            messages,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ChatSessionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn counselor_id(&self) -> Option<&CounselorId> {
        self.counselor_id.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// True when no human counselor is assigned.
    pub fn is_ai_session(&self) -> bool {
        self.counselor_id.is_none()
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Returns the last `n` messages in chronological order.
    pub fn recent_history(&self, n: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a message from the user.
    pub fn append_user_message(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::user(content))
    }

    /// Appends a reply from the AI counselor.
    pub fn append_assistant_message(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::assistant(content))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.updated_at = Timestamp::now_after(&self.updated_at);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

/// Checks an incoming user message before any side effect.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// - `EmptyMessage` if the message is empty or whitespace only
/// - `MessageTooLong` if it exceeds `max_chars`
pub fn validate_user_message(content: &str, max_chars: usize) -> Result<(), ChatError> {
    if content.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    let actual = content.chars().count();
    if actual > max_chars {
        return Err(ChatError::MessageTooLong {
            max: max_chars,
            actual,
        });
    }
    Ok(())
}
