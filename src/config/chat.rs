//! Chat appender tuning

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::chat::DEFAULT_MAX_MESSAGE_CHARS;

/// Largest history window sent to the AI provider.
pub const MAX_HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Most recent messages forwarded to the AI provider
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Longest accepted user message, in characters
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,

    /// Longest wait for an AI reply before the fallback text is stored
    #[serde(default = "default_reply_timeout")]
    pub reply_timeout_secs: u64,
}

impl ChatConfig {
    pub fn reply_timeout(&self) -> Duration {
        Duration::from_secs(self.reply_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_window == 0 || self.history_window > MAX_HISTORY_WINDOW {
            return Err(ValidationError::InvalidHistoryWindow);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::ZeroChatLimit("max_tokens"));
        }
        if self.max_message_chars == 0 {
            return Err(ValidationError::ZeroChatLimit("max_message_chars"));
        }
        if self.reply_timeout_secs == 0 {
            return Err(ValidationError::ZeroChatLimit("reply_timeout_secs"));
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_window: default_history_window(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            max_message_chars: default_max_message_chars(),
            reply_timeout_secs: default_reply_timeout(),
        }
    }
}

fn default_history_window() -> usize {
    MAX_HISTORY_WINDOW
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_message_chars() -> usize {
    DEFAULT_MAX_MESSAGE_CHARS
}

fn default_reply_timeout() -> u64 {
    50
}
