//! PostgreSQL implementation of MoodRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, MoodId, Timestamp, UserId};
use crate::domain::mood::{Mood, MoodKind};
use crate::ports::MoodRepository;

#[derive(Clone)]
pub struct PostgresMoodRepository {
    pool: PgPool,
}

impl PostgresMoodRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MoodRepository for PostgresMoodRepository {
    async fn save(&self, mood: &Mood) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO moods (id, user_id, mood, note, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(mood.id().as_uuid())
        .bind(mood.user_id().as_str())
        .bind(mood.mood().as_str())
        .bind(mood.note())
        .bind(mood.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert mood", e))?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Mood>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, mood, note, created_at
            FROM moods
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch moods by user", e))?;

        rows.iter().map(row_to_mood).collect()
    }
}

fn row_to_mood(row: &PgRow) -> Result<Mood, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let mood: String = column(row, "mood")?;
    let note: Option<String> = column(row, "note")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    Ok(Mood::reconstitute(
        MoodId::from_uuid(id),
        UserId::new(user_id)?,
        mood.parse::<MoodKind>()?,
        note,
        Timestamp::from_datetime(created_at),
    ))
}
