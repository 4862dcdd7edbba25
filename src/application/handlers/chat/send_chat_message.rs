//! SendChatMessageHandler - Appends a user message and, for AI sessions,
//! the assistant's reply.
//!
//! The AI call never fails the request: provider errors and empty replies
//! are replaced by fixed fallback texts so every append to an AI session
//! adds exactly two messages.

use std::sync::Arc;

use super::SessionLocks;
use crate::config::ChatConfig;
use crate::domain::chat::{
    validate_user_message, ChatError, ChatRole, ChatSession, AI_EMPTY_REPLY_FALLBACK,
    AI_ERROR_FALLBACK, COUNSELOR_SYSTEM_PROMPT,
};
use crate::domain::foundation::{ChatSessionId, UserId};
use crate::ports::{AIProvider, ChatSessionRepository, CompletionRequest, MessageRole, RequestMetadata};

#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub session_id: ChatSessionId,
    pub user_id: UserId,
    pub message: String,
}

pub struct SendChatMessageHandler {
    sessions: Arc<dyn ChatSessionRepository>,
    ai_provider: Arc<dyn AIProvider>,
    locks: SessionLocks,
    config: ChatConfig,
}

impl SendChatMessageHandler {
    pub fn new(
        sessions: Arc<dyn ChatSessionRepository>,
        ai_provider: Arc<dyn AIProvider>,
        locks: SessionLocks,
        config: ChatConfig,
    ) -> Self {
        Self {
            sessions,
            ai_provider,
            locks,
            config,
        }
    }

    #[tracing::instrument(
        skip(self, cmd),
        fields(session_id = %cmd.session_id, user_id = %cmd.user_id)
    )]
    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatSession, ChatError> {
        let id = cmd.session_id;
        let _lock = self.locks.acquire(id).await;

        let mut session = self
            .sessions
            .find_by_id(&id)
            .await
            .map_err(|e| ChatError::from_domain(id, e))?
            .filter(|session| session.is_owner(&cmd.user_id))
            .ok_or_else(|| ChatError::not_found(id))?;

        validate_user_message(&cmd.message, self.config.max_message_chars)?;

        let expected_count = session.message_count();
        session.append_user_message(cmd.message);

        if session.is_ai_session() {
            let reply = self.generate_reply(&session).await;
            session.append_assistant_message(reply);
        }

        self.sessions
            .update(&session, expected_count)
            .await
            .map_err(|e| ChatError::from_domain(id, e))?;

        tracing::debug!(messages = session.message_count(), "Chat message appended");
        Ok(session)
    }

    async fn generate_reply(&self, session: &ChatSession) -> String {
        let metadata = RequestMetadata::new(
            session.user_id().clone(),
            *session.id(),
            uuid::Uuid::new_v4().to_string(),
        );

        let request = session
            .recent_history(self.config.history_window)
            .iter()
            .fold(
                CompletionRequest::new(metadata)
                    .with_system_prompt(COUNSELOR_SYSTEM_PROMPT)
                    .with_max_tokens(self.config.max_tokens)
                    .with_temperature(self.config.temperature),
                |request, message| {
                    let role = match message.role {
                        ChatRole::User => MessageRole::User,
                        ChatRole::Assistant => MessageRole::Assistant,
                    };
                    request.with_message(role, message.content.clone())
                },
            );

        let reply_timeout = self.config.reply_timeout();
        match tokio::time::timeout(reply_timeout, self.ai_provider.complete(request)).await {
            Ok(Ok(response)) if response.content.trim().is_empty() => {
                tracing::warn!("AI provider returned an empty reply");
                AI_EMPTY_REPLY_FALLBACK.to_string()
            }
            Ok(Ok(response)) => response.content,
            Ok(Err(error)) => {
                tracing::warn!(%error, "AI provider failed, sending fallback reply");
                AI_ERROR_FALLBACK.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = reply_timeout.as_secs(),
                    "AI provider timed out, sending fallback reply"
                );
                AI_ERROR_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::memory::InMemoryChatSessionRepository;
    use crate::domain::foundation::{CounselorId, DomainError, ErrorCode};
    use async_trait::async_trait;
    use std::time::Duration;

    struct Fixture {
        repo: Arc<InMemoryChatSessionRepository>,
        ai: MockAIProvider,
        handler: Arc<SendChatMessageHandler>,
    }

    fn fixture_with(ai: MockAIProvider, config: ChatConfig) -> Fixture {
        let repo = Arc::new(InMemoryChatSessionRepository::new());
        let handler = Arc::new(SendChatMessageHandler::new(
            repo.clone(),
            Arc::new(ai.clone()),
            SessionLocks::new(),
            config,
        ));
        Fixture { repo, ai, handler }
    }

    fn fixture(ai: MockAIProvider) -> Fixture {
        fixture_with(ai, ChatConfig::default())
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    async fn ai_session(repo: &InMemoryChatSessionRepository) -> ChatSession {
        let session = ChatSession::new(user(), None);
        repo.save(&session).await.unwrap();
        session
    }

    fn send(session: &ChatSession, message: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            session_id: *session.id(),
            user_id: user(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn ai_session_gets_user_and_assistant_messages() {
        let f = fixture(MockAIProvider::new().with_response("Aku di sini untukmu."));
        let session = ai_session(&f.repo).await;

        let updated = f.handler.handle(send(&session, "halo")).await.unwrap();

        assert_eq!(updated.message_count(), 2);
        assert_eq!(updated.messages()[0].role, ChatRole::User);
        assert_eq!(updated.messages()[0].content, "halo");
        assert_eq!(updated.messages()[1].role, ChatRole::Assistant);
        assert_eq!(updated.messages()[1].content, "Aku di sini untukmu.");
        assert!(updated.updated_at() >= session.updated_at());
    }

    #[tokio::test]
    async fn sending_twice_alternates_roles() {
        let f = fixture(MockAIProvider::new());
        let session = ai_session(&f.repo).await;

        f.handler.handle(send(&session, "halo")).await.unwrap();
        let updated = f.handler.handle(send(&session, "halo")).await.unwrap();

        let roles: Vec<ChatRole> = updated.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant
            ]
        );
        let stored = f.repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.message_count(), 4);
    }

    #[tokio::test]
    async fn provider_failure_appends_fallback() {
        let f = fixture(MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        }));
        let session = ai_session(&f.repo).await;

        let updated = f.handler.handle(send(&session, "halo")).await.unwrap();

        assert_eq!(updated.message_count(), 2);
        assert_eq!(updated.messages()[1].content, AI_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn slow_provider_is_cut_off_with_fallback() {
        let config = ChatConfig {
            reply_timeout_secs: 1,
            ..Default::default()
        };
        let f = fixture_with(
            MockAIProvider::new().with_delay(Duration::from_secs(3)),
            config,
        );
        let session = ai_session(&f.repo).await;

        let updated = f.handler.handle(send(&session, "halo")).await.unwrap();

        assert_eq!(updated.message_count(), 2);
        assert_eq!(updated.messages()[0].content, "halo");
        assert_eq!(updated.messages()[1].content, AI_ERROR_FALLBACK);
        let stored = f.repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.message_count(), 2);
    }

    #[tokio::test]
    async fn empty_reply_appends_could_not_process_text() {
        let f = fixture(MockAIProvider::new().with_response("   "));
        let session = ai_session(&f.repo).await;

        let updated = f.handler.handle(send(&session, "halo")).await.unwrap();

        assert_eq!(updated.messages()[1].content, AI_EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn counselor_session_gets_only_the_user_message() {
        let f = fixture(MockAIProvider::new());
        let session = ChatSession::new(user(), Some(CounselorId::new("rina-sari").unwrap()));
        f.repo.save(&session).await.unwrap();

        let updated = f.handler.handle(send(&session, "halo")).await.unwrap();

        assert_eq!(updated.message_count(), 1);
        assert_eq!(f.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn request_carries_persona_and_bounded_history() {
        let config = ChatConfig {
            history_window: 3,
            ..Default::default()
        };
        let f = fixture_with(MockAIProvider::new(), config);
        let session = ai_session(&f.repo).await;

        f.handler.handle(send(&session, "satu")).await.unwrap();
        f.handler.handle(send(&session, "dua")).await.unwrap();

        let calls = f.ai.get_calls();
        assert_eq!(calls.len(), 2);
        let last = &calls[1];
        assert_eq!(last.system_prompt.as_deref(), Some(COUNSELOR_SYSTEM_PROMPT));
        assert_eq!(last.max_tokens, Some(500));
        assert_eq!(last.temperature, Some(0.7));
        assert_eq!(last.messages.len(), 3);
        assert_eq!(last.messages[2].role, MessageRole::User);
        assert_eq!(last.messages[2].content, "dua");
    }

    #[tokio::test]
    async fn foreign_or_missing_session_is_not_found_and_untouched() {
        let f = fixture(MockAIProvider::new());
        let session = ai_session(&f.repo).await;

        let foreign = SendChatMessageCommand {
            user_id: UserId::new("intruder").unwrap(),
            ..send(&session, "halo")
        };
        assert_eq!(
            f.handler.handle(foreign).await,
            Err(ChatError::NotFound(*session.id()))
        );

        let missing_id = ChatSessionId::new();
        let missing = SendChatMessageCommand {
            session_id: missing_id,
            ..send(&session, "halo")
        };
        assert_eq!(
            f.handler.handle(missing).await,
            Err(ChatError::NotFound(missing_id))
        );

        let stored = f.repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.message_count(), 0);
        assert_eq!(f.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn invalid_messages_are_rejected_before_any_side_effect() {
        let config = ChatConfig {
            max_message_chars: 5,
            ..Default::default()
        };
        let f = fixture_with(MockAIProvider::new(), config);
        let session = ai_session(&f.repo).await;

        assert_eq!(
            f.handler.handle(send(&session, "   ")).await,
            Err(ChatError::EmptyMessage)
        );
        assert_eq!(
            f.handler.handle(send(&session, "terlalu panjang")).await,
            Err(ChatError::MessageTooLong { max: 5, actual: 15 })
        );

        let stored = f.repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.message_count(), 0);
        assert_eq!(f.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn concurrent_sends_lose_no_messages() {
        let f = fixture(MockAIProvider::new().with_delay(Duration::from_millis(5)));
        let session = ai_session(&f.repo).await;

        let mut tasks = Vec::new();
        for i in 0..5 {
            let handler = Arc::clone(&f.handler);
            let cmd = send(&session, &format!("pesan {}", i));
            tasks.push(tokio::spawn(async move { handler.handle(cmd).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = f.repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.message_count(), 10);
        for pair in stored.messages().chunks(2) {
            assert_eq!(pair[0].role, ChatRole::User);
            assert_eq!(pair[1].role, ChatRole::Assistant);
        }
    }

    struct StaleWriteRepository {
        inner: InMemoryChatSessionRepository,
    }

    #[async_trait]
    impl ChatSessionRepository for StaleWriteRepository {
        async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
            self.inner.save(session).await
        }

        async fn update(&self, session: &ChatSession, _expected: usize) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!("{} changed", session.id()),
            ))
        }

        async fn find_by_id(&self, id: &ChatSessionId) -> Result<Option<ChatSession>, DomainError> {
            self.inner.find_by_id(id).await
        }

        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError> {
            self.inner.find_by_user_id(user_id).await
        }
    }

    #[tokio::test]
    async fn lost_conditional_write_is_a_conflict() {
        let repo = Arc::new(StaleWriteRepository {
            inner: InMemoryChatSessionRepository::new(),
        });
        let session = ChatSession::new(user(), None);
        repo.save(&session).await.unwrap();
        let handler = SendChatMessageHandler::new(
            repo,
            Arc::new(MockAIProvider::new()),
            SessionLocks::new(),
            ChatConfig::default(),
        );

        let result = handler.handle(send(&session, "halo")).await;

        assert_eq!(result, Err(ChatError::Conflict(*session.id())));
    }
}
