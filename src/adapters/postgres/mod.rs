//! PostgreSQL adapters - sqlx implementations of the repository ports.
//!
//! - `PostgresChatSessionRepository` - Sessions with JSONB message lists
//! - `PostgresAssessmentRepository` - SRQ-29 results
//! - `PostgresMoodRepository`, `PostgresJournalRepository`,
//!   `PostgresAchievementRepository` - Personal records
//! - `PostgresCounselorDirectory` - Seeded counselor table

mod achievement_repository;
mod assessment_repository;
mod chat_session_repository;
mod counselor_directory;
mod journal_repository;
mod mood_repository;

pub use achievement_repository::PostgresAchievementRepository;
pub use assessment_repository::PostgresAssessmentRepository;
pub use chat_session_repository::PostgresChatSessionRepository;
pub use counselor_directory::PostgresCounselorDirectory;
pub use journal_repository::PostgresJournalRepository;
pub use mood_repository::PostgresMoodRepository;

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens a connection pool and, when configured, runs pending migrations.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}

/// Wraps a sqlx error with what was being attempted.
fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

/// Reads a column, reporting the column name on failure.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}
