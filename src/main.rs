//! Curhatin API server.

use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::Secret;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use curhatin::adapters::ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
use curhatin::adapters::auth::{JwtConfig, JwtSessionValidator};
use curhatin::adapters::http::{build_router, AppServices};
use curhatin::adapters::postgres::{
    self, PostgresAchievementRepository, PostgresAssessmentRepository,
    PostgresChatSessionRepository, PostgresCounselorDirectory, PostgresJournalRepository,
    PostgresMoodRepository,
};
use curhatin::adapters::rate_limiter::{InMemoryRateLimiter, RateLimitConfig, RedisRateLimiter};
use curhatin::config::{AppConfig, ConfigError};
use curhatin::domain::foundation::DomainError;
use curhatin::ports::{AIError, AIProvider, RateLimitError, RateLimiter};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database: {0}")]
    Database(#[from] DomainError),

    #[error("ai provider: {0}")]
    Ai(#[from] AIError),

    #[error("rate limiter: {0}")]
    RateLimiter(#[from] RateLimitError),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "Server failed to start");
        eprintln!("curhatin: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate().map_err(ConfigError::from)?;

    tracing::info!(
        environment = ?config.server.environment,
        backend = ?config.database.backend,
        "Starting curhatin"
    );

    let services = build_services(&config).await?;
    let router = build_router(services, &config.server);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("curhatin listening on {}", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON lines in production, human-readable output elsewhere. `RUST_LOG`
/// overrides the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_services(config: &AppConfig) -> Result<AppServices, StartupError> {
    let session_validator = {
        let mut jwt = JwtConfig::new(Secret::new(config.auth.jwt_secret.clone()));
        if let Some(issuer) = &config.auth.issuer {
            jwt = jwt.with_issuer(issuer.clone());
        }
        if let Some(audience) = &config.auth.audience {
            jwt = jwt.with_audience(audience.clone());
        }
        Arc::new(JwtSessionValidator::new(jwt))
    };

    let limits = RateLimitConfig::from(&config.rate_limit);
    let rate_limiter: Arc<dyn RateLimiter> = match config.redis.url() {
        Some(url) => {
            tracing::info!("Using Redis rate limiter");
            Arc::new(RedisRateLimiter::connect(url, limits).await?)
        }
        None => Arc::new(InMemoryRateLimiter::new(limits)),
    };

    let ai_provider: Arc<dyn AIProvider> = match &config.ai.openai_api_key {
        Some(key) if config.ai.has_openai() => {
            let openai = OpenAIConfig::new(key.clone())
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout())
                .with_max_retries(config.ai.max_retries);
            Arc::new(OpenAIProvider::new(openai)?)
        }
        _ => {
            tracing::warn!("No OpenAI API key configured, AI replies come from the mock provider");
            Arc::new(MockAIProvider::new())
        }
    };

    let mut services = AppServices::in_memory(
        session_validator,
        rate_limiter,
        ai_provider,
        config.chat.clone(),
    );

    if config.database.is_postgres() {
        let pool = postgres::connect(&config.database).await?;
        services.chat_sessions = Arc::new(PostgresChatSessionRepository::new(pool.clone()));
        services.assessments = Arc::new(PostgresAssessmentRepository::new(pool.clone()));
        services.moods = Arc::new(PostgresMoodRepository::new(pool.clone()));
        services.journal = Arc::new(PostgresJournalRepository::new(pool.clone()));
        services.counselors = Arc::new(PostgresCounselorDirectory::new(pool.clone()));
        services.achievements = Arc::new(PostgresAchievementRepository::new(pool));
    } else {
        tracing::warn!("Using in-memory storage; data is lost on restart");
    }

    Ok(services)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
