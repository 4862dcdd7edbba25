//! In-memory ChatSessionRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{ChatSessionId, DomainError, ErrorCode, UserId};
use crate::ports::ChatSessionRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryChatSessionRepository {
    sessions: Arc<RwLock<HashMap<ChatSessionId, ChatSession>>>,
}

impl InMemoryChatSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatSessionRepository for InMemoryChatSessionRepository {
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(
        &self,
        session: &ChatSession,
        expected_message_count: usize,
    ) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(session.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ChatSessionNotFound,
                format!("Chat session not found: {}", session.id()),
            )
        })?;

        if stored.message_count() != expected_message_count {
            return Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!(
                    "Chat session {} has {} messages, expected {}",
                    session.id(),
                    stored.message_count(),
                    expected_message_count
                ),
            ));
        }

        *stored = session.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &ChatSessionId) -> Result<Option<ChatSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError> {
        let mut sessions: Vec<ChatSession> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.is_owner(user_id))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(sessions)
    }
}
