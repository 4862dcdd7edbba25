//! PostgreSQL implementation of CounselorDirectory. Rows are seeded by
//! the initial migration.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::counselor::Counselor;
use crate::domain::foundation::{CounselorId, DomainError};
use crate::ports::CounselorDirectory;

#[derive(Clone)]
pub struct PostgresCounselorDirectory {
    pool: PgPool,
}

impl PostgresCounselorDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounselorDirectory for PostgresCounselorDirectory {
    async fn list(&self) -> Result<Vec<Counselor>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, specialization, description, rating, sessions_count,
                   is_online, image_url
            FROM counselors
            ORDER BY sort_order, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch counselors", e))?;

        rows.iter().map(row_to_counselor).collect()
    }

    async fn find_by_id(&self, id: &CounselorId) -> Result<Option<Counselor>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, specialization, description, rating, sessions_count,
                   is_online, image_url
            FROM counselors
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch counselor", e))?;

        row.as_ref().map(row_to_counselor).transpose()
    }
}

fn row_to_counselor(row: &PgRow) -> Result<Counselor, DomainError> {
    let id: String = column(row, "id")?;
    let rating: i16 = column(row, "rating")?;
    let sessions_count: i32 = column(row, "sessions_count")?;

    Ok(Counselor {
        id: CounselorId::new(id)?,
        name: column(row, "name")?,
        specialization: column(row, "specialization")?,
        description: column(row, "description")?,
        rating: rating.clamp(1, 5) as u8,
        sessions_count: sessions_count.max(0) as u32,
        is_online: column(row, "is_online")?,
        image_url: column(row, "image_url")?,
    })
}
