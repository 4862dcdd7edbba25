//! Limits applied by the rate limiter adapters.

use serde::{Deserialize, Serialize};

use crate::config::RateLimitSettings;
use crate::ports::{RateLimitKey, RateLimitScope, CHAT_MESSAGES_RESOURCE};

/// Per-scope request limits, all counted over the same fixed window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests per window per client IP.
    pub per_ip: u32,
    /// Requests per window per authenticated user.
    pub per_user: u32,
    /// Chat message sends per window per user.
    pub chat_messages: u32,
    /// Window duration in seconds.
    pub window_secs: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_ip: 120,
            per_user: 300,
            chat_messages: 20,
            window_secs: 60,
        }
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self {
            per_ip: settings.per_ip_per_minute,
            per_user: settings.per_user_per_minute,
            chat_messages: settings.chat_messages_per_minute,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    /// Returns `(limit, window_secs)` for a key.
    pub fn limits_for(&self, key: &RateLimitKey) -> (u32, u32) {
        let limit = match (key.scope, key.resource.as_deref()) {
            (RateLimitScope::Ip, _) => self.per_ip,
            (RateLimitScope::User, Some(CHAT_MESSAGES_RESOURCE)) => self.chat_messages,
            (RateLimitScope::User, _) => self.per_user,
        };
        (limit, self.window_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn limits_follow_scope_and_resource() {
        let config = RateLimitConfig::default();
        let user = UserId::new("u").unwrap();

        assert_eq!(config.limits_for(&RateLimitKey::ip("1.2.3.4")), (120, 60));
        assert_eq!(config.limits_for(&RateLimitKey::user(&user)), (300, 60));
        assert_eq!(config.limits_for(&RateLimitKey::chat_messages(&user)), (20, 60));
        assert_eq!(
            config.limits_for(&RateLimitKey::user_resource(&user, "other")),
            (300, 60)
        );
    }
}
