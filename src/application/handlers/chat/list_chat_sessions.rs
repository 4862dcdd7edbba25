//! ListChatSessionsHandler - The caller's sessions, most recently active first.

use std::sync::Arc;

use crate::domain::chat::{ChatError, ChatSession};
use crate::domain::foundation::UserId;
use crate::ports::ChatSessionRepository;

#[derive(Debug, Clone)]
pub struct ListChatSessionsQuery {
    pub user_id: UserId,
}

pub struct ListChatSessionsHandler {
    sessions: Arc<dyn ChatSessionRepository>,
}

impl ListChatSessionsHandler {
    pub fn new(sessions: Arc<dyn ChatSessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: ListChatSessionsQuery) -> Result<Vec<ChatSession>, ChatError> {
        Ok(self.sessions.find_by_user_id(&query.user_id).await?)
    }
}
