//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Upper bound on `max_retries`; backoff doubles per retry.
pub const MAX_AI_RETRIES: u32 = 5;

/// First backoff delay between retries, in seconds.
pub const RETRY_BASE_DELAY_SECS: u64 = 1;

/// OpenAI-compatible chat completion settings
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// API key; without one the mock provider answers in development
    pub openai_api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on retryable failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Worst case for one completion: every attempt times out and every
    /// backoff sleep runs in full.
    pub fn worst_case_secs(&self) -> u64 {
        let attempts = self.max_retries as u64 + 1;
        let backoff = RETRY_BASE_DELAY_SECS * ((1u64 << self.max_retries.min(MAX_AI_RETRIES)) - 1);
        self.timeout_secs.saturating_mul(attempts).saturating_add(backoff)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration. Production requires an API key.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if *environment == Environment::Production && !self.has_openai() {
            return Err(ValidationError::MissingRequired("AI__OPENAI_API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > MAX_AI_RETRIES {
            return Err(ValidationError::TooManyRetries(MAX_AI_RETRIES));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("openai_api_key", &self.has_openai().then_some("[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_retries() -> u32 {
    2
}
