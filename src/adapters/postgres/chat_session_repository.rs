//! PostgreSQL implementation of ChatSessionRepository.
//!
//! Messages live in a JSONB array on the session row. `update` is a
//! compare-and-set on the array length so concurrent appends from different
//! processes cannot overwrite each other.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::chat::{ChatMessage, ChatSession};
use crate::domain::foundation::{
    ChatSessionId, CounselorId, DomainError, ErrorCode, Timestamp, UserId,
};
use crate::ports::ChatSessionRepository;

#[derive(Clone)]
pub struct PostgresChatSessionRepository {
    pool: PgPool,
}

impl PostgresChatSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatSessionRepository for PostgresChatSessionRepository {
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chat_sessions (id, user_id, counselor_id, messages, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.user_id().as_str())
        .bind(session.counselor_id().map(|c| c.as_str()))
        .bind(Json(session.messages()))
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert chat session", e))?;

        Ok(())
    }

    async fn update(
        &self,
        session: &ChatSession,
        expected_message_count: usize,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE chat_sessions SET
                messages = $2,
                updated_at = $3
            WHERE id = $1 AND jsonb_array_length(messages) = $4
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(Json(session.messages()))
        .bind(session.updated_at().as_datetime())
        .bind(expected_message_count as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update chat session", e))?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM chat_sessions WHERE id = $1)")
                .bind(session.id().as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("check chat session existence", e))?;

        if exists.0 {
            Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!("Chat session {} changed since it was read", session.id()),
            ))
        } else {
            Err(DomainError::new(
                ErrorCode::ChatSessionNotFound,
                format!("Chat session not found: {}", session.id()),
            ))
        }
    }

    async fn find_by_id(&self, id: &ChatSessionId) -> Result<Option<ChatSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, counselor_id, messages, created_at, updated_at
            FROM chat_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch chat session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<ChatSession>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, counselor_id, messages, created_at, updated_at
            FROM chat_sessions
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch chat sessions by user", e))?;

        rows.iter().map(row_to_session).collect()
    }
}

fn row_to_session(row: &PgRow) -> Result<ChatSession, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let counselor_id: Option<String> = column(row, "counselor_id")?;
    let Json(messages): Json<Vec<ChatMessage>> = column(row, "messages")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    Ok(ChatSession::reconstitute(
        ChatSessionId::from_uuid(id),
        UserId::new(user_id)?,
        counselor_id.map(CounselorId::new).transpose()?,
        messages,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
