//! PostgreSQL implementation of AchievementRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::achievement::Achievement;
use crate::domain::foundation::{AchievementId, DomainError, Timestamp, UserId};
use crate::ports::AchievementRepository;

#[derive(Clone)]
pub struct PostgresAchievementRepository {
    pool: PgPool,
}

impl PostgresAchievementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementRepository for PostgresAchievementRepository {
    async fn save(&self, achievement: &Achievement) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO achievements (id, user_id, kind, title, description, icon, unlocked_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(achievement.id().as_uuid())
        .bind(achievement.user_id().as_str())
        .bind(achievement.kind())
        .bind(achievement.title())
        .bind(achievement.description())
        .bind(achievement.icon())
        .bind(achievement.unlocked_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert achievement", e))?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Achievement>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, kind, title, description, icon, unlocked_at
            FROM achievements
            WHERE user_id = $1
            ORDER BY unlocked_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch achievements by user", e))?;

        rows.iter().map(row_to_achievement).collect()
    }
}

fn row_to_achievement(row: &PgRow) -> Result<Achievement, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let unlocked_at: chrono::DateTime<chrono::Utc> = column(row, "unlocked_at")?;

    Ok(Achievement::reconstitute(
        AchievementId::from_uuid(id),
        UserId::new(user_id)?,
        column(row, "kind")?,
        column(row, "title")?,
        column(row, "description")?,
        column(row, "icon")?,
        Timestamp::from_datetime(unlocked_at),
    ))
}
