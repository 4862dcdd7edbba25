//! GetChatSessionHandler - Owner-scoped session lookup.

use std::sync::Arc;

use crate::domain::chat::{ChatError, ChatSession};
use crate::domain::foundation::{ChatSessionId, UserId};
use crate::ports::ChatSessionRepository;

#[derive(Debug, Clone)]
pub struct GetChatSessionQuery {
    pub session_id: ChatSessionId,
    pub user_id: UserId,
}

pub struct GetChatSessionHandler {
    sessions: Arc<dyn ChatSessionRepository>,
}

impl GetChatSessionHandler {
    pub fn new(sessions: Arc<dyn ChatSessionRepository>) -> Self {
        Self { sessions }
    }

    /// Sessions owned by someone else are reported as not found.
    pub async fn handle(&self, query: GetChatSessionQuery) -> Result<ChatSession, ChatError> {
        self.sessions
            .find_by_id(&query.session_id)
            .await?
            .filter(|session| session.is_owner(&query.user_id))
            .ok_or_else(|| ChatError::not_found(query.session_id))
    }
}
