//! CreateChatSessionHandler - Starts an AI or counselor chat session.

use std::sync::Arc;

use crate::domain::chat::{ChatError, ChatSession};
use crate::domain::foundation::{CounselorId, UserId};
use crate::ports::{ChatSessionRepository, CounselorDirectory};

/// Command to create a chat session. Without a counselor the session is
/// answered by the AI provider.
#[derive(Debug, Clone)]
pub struct CreateChatSessionCommand {
    pub user_id: UserId,
    pub counselor_id: Option<CounselorId>,
}

pub struct CreateChatSessionHandler {
    sessions: Arc<dyn ChatSessionRepository>,
    counselors: Arc<dyn CounselorDirectory>,
}

impl CreateChatSessionHandler {
    pub fn new(
        sessions: Arc<dyn ChatSessionRepository>,
        counselors: Arc<dyn CounselorDirectory>,
    ) -> Self {
        Self {
            sessions,
            counselors,
        }
    }

    pub async fn handle(&self, cmd: CreateChatSessionCommand) -> Result<ChatSession, ChatError> {
        if let Some(counselor_id) = &cmd.counselor_id {
            if self.counselors.find_by_id(counselor_id).await?.is_none() {
                return Err(ChatError::UnknownCounselor(counselor_id.clone()));
            }
        }

        let session = ChatSession::new(cmd.user_id, cmd.counselor_id);
        self.sessions.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            ai_session = session.is_ai_session(),
            "Chat session created"
        );

        Ok(session)
    }
}
