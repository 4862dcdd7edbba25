//! PostgreSQL implementation of AssessmentRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::assessment::{Assessment, RiskBand};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::AssessmentRepository;

#[derive(Clone)]
pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO srq_assessments (id, user_id, answers, score, interpretation, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(assessment.id().as_uuid())
        .bind(assessment.user_id().as_str())
        .bind(Json(assessment.answers()))
        .bind(assessment.score() as i16)
        .bind(assessment.band().as_str())
        .bind(assessment.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert assessment", e))?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, answers, score, interpretation, created_at
            FROM srq_assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch assessments by user", e))?;

        rows.iter().map(row_to_assessment).collect()
    }
}

fn row_to_assessment(row: &PgRow) -> Result<Assessment, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let Json(answers): Json<Vec<bool>> = column(row, "answers")?;
    let score: i16 = column(row, "score")?;
    let interpretation: String = column(row, "interpretation")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    let band = RiskBand::parse(&interpretation).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Unknown interpretation band: {}", interpretation),
        )
    })?;

    Ok(Assessment::reconstitute(
        AssessmentId::from_uuid(id),
        UserId::new(user_id)?,
        answers,
        score.clamp(0, 29) as u8,
        band,
        Timestamp::from_datetime(created_at),
    ))
}
