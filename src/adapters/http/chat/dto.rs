//! Request and response shapes for chat session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatMessage, ChatSession};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateChatSessionRequest {
    #[serde(default)]
    pub counselor_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub id: String,
    pub role: String,
    pub content: String,
    pub timestamp: String,
}

impl From<&ChatMessage> for ChatMessageResponse {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.to_string(),
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
            timestamp: message.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSessionResponse {
    pub id: String,
    pub counselor_id: Option<String>,
    pub messages: Vec<ChatMessageResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ChatSession> for ChatSessionResponse {
    fn from(session: &ChatSession) -> Self {
        Self {
            id: session.id().to_string(),
            counselor_id: session.counselor_id().map(|c| c.to_string()),
            messages: session.messages().iter().map(Into::into).collect(),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CounselorId, UserId};

    #[test]
    fn create_request_counselor_is_optional() {
        let req: CreateChatSessionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.counselor_id.is_none());

        let req: CreateChatSessionRequest =
            serde_json::from_str(r#"{"counselor_id":"rina-sari"}"#).unwrap();
        assert_eq!(req.counselor_id.as_deref(), Some("rina-sari"));
    }

    #[test]
    fn session_response_lists_messages_in_order() {
        let mut session = ChatSession::new(
            UserId::new("user-1").unwrap(),
            Some(CounselorId::new("rina-sari").unwrap()),
        );
        session.append_user_message("halo");
        session.append_assistant_message("hai");

        let response = ChatSessionResponse::from(&session);

        assert_eq!(response.counselor_id.as_deref(), Some("rina-sari"));
        let roles: Vec<&str> = response.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["user", "assistant"]);
    }
}
