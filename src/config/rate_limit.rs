//! Rate limit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Per-minute request budgets.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    #[serde(default = "default_per_ip")]
    pub per_ip_per_minute: u32,

    #[serde(default = "default_per_user")]
    pub per_user_per_minute: u32,

    /// Chat message sends per user, on top of the per-user budget
    #[serde(default = "default_chat_messages")]
    pub chat_messages_per_minute: u32,
}

impl RateLimitSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.per_ip_per_minute == 0 {
            return Err(ValidationError::ZeroRateLimit("per_ip_per_minute"));
        }
        if self.per_user_per_minute == 0 {
            return Err(ValidationError::ZeroRateLimit("per_user_per_minute"));
        }
        if self.chat_messages_per_minute == 0 {
            return Err(ValidationError::ZeroRateLimit("chat_messages_per_minute"));
        }
        Ok(())
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_ip_per_minute: default_per_ip(),
            per_user_per_minute: default_per_user(),
            chat_messages_per_minute: default_chat_messages(),
        }
    }
}

fn default_per_ip() -> u32 {
    120
}

fn default_per_user() -> u32 {
    300
}

fn default_chat_messages() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budgets_are_rejected() {
        let settings = RateLimitSettings {
            chat_messages_per_minute: 0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ValidationError::ZeroRateLimit("chat_messages_per_minute"))
        );
        assert!(RateLimitSettings::default().validate().is_ok());
    }
}
