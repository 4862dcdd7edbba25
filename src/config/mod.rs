//! Application configuration module
//!
//! Typed configuration loaded from environment variables using the `config`
//! and `dotenvy` crates. Variables use the `CURHATIN` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use curhatin::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod auth;
mod chat;
mod database;
mod error;
mod rate_limit;
mod redis;
mod server;

pub use ai::{AiConfig, MAX_AI_RETRIES};
pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use chat::{ChatConfig, MAX_HISTORY_WINDOW};
pub use database::{DatabaseBackend, DatabaseConfig};
pub use error::{ConfigError, ValidationError};
pub use rate_limit::RateLimitSettings;
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults except `auth.jwt_secret`, which must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub redis: RedisConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present
    /// 2. Reads variables with the `CURHATIN` prefix
    /// 3. Splits nested keys on `__`
    ///
    /// - `CURHATIN__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CURHATIN__DATABASE__BACKEND=postgres` -> `database.backend`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CURHATIN")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.redis.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate(&self.server.environment)?;
        self.chat.validate()?;
        self.rate_limit.validate()?;
        self.validate_reply_budget()
    }

    /// A slow AI provider must fall back to the canned reply before the
    /// inbound request times out, so the user's message is kept.
    fn validate_reply_budget(&self) -> Result<(), ValidationError> {
        let reply_secs = self.chat.reply_timeout_secs;
        let ai_secs = self.ai.worst_case_secs();
        if ai_secs > reply_secs {
            return Err(ValidationError::AiBudgetExceedsReplyTimeout { ai_secs, reply_secs });
        }
        let request_secs = self.server.request_timeout_secs;
        if reply_secs >= request_secs {
            return Err(ValidationError::ReplyTimeoutExceedsRequestTimeout {
                reply_secs,
                request_secs,
            });
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
