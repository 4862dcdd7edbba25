//! PostgreSQL implementation of JournalRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, ErrorCode, JournalEntryId, Timestamp, UserId};
use crate::domain::journal::JournalEntry;
use crate::domain::mood::MoodKind;
use crate::ports::JournalRepository;

#[derive(Clone)]
pub struct PostgresJournalRepository {
    pool: PgPool,
}

impl PostgresJournalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: &JournalEntryId) -> DomainError {
    DomainError::new(
        ErrorCode::JournalEntryNotFound,
        format!("Journal entry not found: {}", id),
    )
}

#[async_trait]
impl JournalRepository for PostgresJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO journal_entries (id, user_id, title, content, mood, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.user_id().as_str())
        .bind(entry.title())
        .bind(entry.content())
        .bind(entry.mood().map(|m| m.as_str()))
        .bind(entry.created_at().as_datetime())
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert journal entry", e))?;

        Ok(())
    }

    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE journal_entries SET
                title = $2,
                content = $3,
                mood = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.title())
        .bind(entry.content())
        .bind(entry.mood().map(|m| m.as_str()))
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update journal entry", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(entry.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &JournalEntryId) -> Result<Option<JournalEntry>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, content, mood, created_at, updated_at
            FROM journal_entries
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch journal entry", e))?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, content, mood, created_at, updated_at
            FROM journal_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch journal entries by user", e))?;

        rows.iter().map(row_to_entry).collect()
    }

    async fn delete(&self, id: &JournalEntryId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete journal entry", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn row_to_entry(row: &PgRow) -> Result<JournalEntry, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let title: String = column(row, "title")?;
    let content: String = column(row, "content")?;
    let mood: Option<String> = column(row, "mood")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    Ok(JournalEntry::reconstitute(
        JournalEntryId::from_uuid(id),
        UserId::new(user_id)?,
        title,
        content,
        mood.map(|m| m.parse::<MoodKind>()).transpose()?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
