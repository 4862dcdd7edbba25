//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("JWT secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),

    #[error("Chat history window must be between 1 and 10")]
    InvalidHistoryWindow,

    #[error("Chat temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Chat limit must be greater than zero: {0}")]
    ZeroChatLimit(&'static str),

    #[error("Rate limit must be greater than zero: {0}")]
    ZeroRateLimit(&'static str),

    #[error("AI max_retries must be at most {0}")]
    TooManyRetries(u32),

    #[error("AI attempts can take {ai_secs}s, longer than the {reply_secs}s chat reply timeout")]
    AiBudgetExceedsReplyTimeout { ai_secs: u64, reply_secs: u64 },

    #[error("Chat reply timeout ({reply_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    ReplyTimeoutExceedsRequestTimeout { reply_secs: u64, request_secs: u64 },
}
