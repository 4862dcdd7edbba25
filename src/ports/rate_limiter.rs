//! Rate limiting port.
//!
//! Fixed-window counters keyed by client IP, by user, or by user and
//! resource (e.g. chat message sends, which trigger paid AI calls).
//! Implementations: in-memory for tests and single-node, Redis for shared state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, UserId};

/// Resource name for chat message sends.
pub const CHAT_MESSAGES_RESOURCE: &str = "chat_messages";

/// Port for rate limiting operations.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check if a request is allowed, counting it if so.
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError>;
}

/// Key identifying what to rate limit.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RateLimitKey {
    pub scope: RateLimitScope,
    /// IP address or user id.
    pub identifier: String,
    /// Optional resource for finer-grained limits.
    pub resource: Option<String>,
}

/// The scope at which rate limiting is applied.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitScope {
    /// Unauthenticated traffic, keyed by client address.
    Ip,
    /// Authenticated traffic, keyed by user id.
    User,
}

impl RateLimitKey {
    pub fn ip(ip: &str) -> Self {
        Self {
            scope: RateLimitScope::Ip,
            identifier: ip.to_string(),
            resource: None,
        }
    }

    pub fn user(user_id: &UserId) -> Self {
        Self {
            scope: RateLimitScope::User,
            identifier: user_id.to_string(),
            resource: None,
        }
    }

    pub fn user_resource(user_id: &UserId, resource: &str) -> Self {
        Self {
            scope: RateLimitScope::User,
            identifier: user_id.to_string(),
            resource: Some(resource.to_string()),
        }
    }

    /// Key for the stricter per-user chat send limit.
    pub fn chat_messages(user_id: &UserId) -> Self {
        Self::user_resource(user_id, CHAT_MESSAGES_RESOURCE)
    }

    /// Redis key for this counter.
    pub fn to_redis_key(&self) -> String {
        match &self.resource {
            Some(resource) => format!(
                "curhatin:ratelimit:{}:{}:{}",
                self.scope, self.identifier, resource
            ),
            None => format!("curhatin:ratelimit:{}:{}", self.scope, self.identifier),
        }
    }
}

impl RateLimitScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitScope::Ip => "ip",
            RateLimitScope::User => "user",
        }
    }
}

impl fmt::Display for RateLimitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub enum RateLimitResult {
    Allowed(RateLimitStatus),
    Denied(RateLimitDenied),
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, RateLimitResult::Denied(_))
    }
}

/// Current rate limit status.
#[derive(Debug, Clone)]
pub struct RateLimitStatus {
    /// Maximum requests allowed in the window.
    pub limit: u32,
    /// Remaining requests in the current window.
    pub remaining: u32,
    /// When the current window resets.
    pub reset_at: Timestamp,
    pub window_secs: u32,
}

/// Details of a rate limit denial.
#[derive(Debug, Clone)]
pub struct RateLimitDenied {
    pub limit: u32,
    /// Seconds until the client should retry.
    pub retry_after_secs: u32,
    pub scope: RateLimitScope,
    pub message: String,
}

/// Errors that can occur during rate limiting operations.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limiter unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_key_has_no_resource() {
        let key = RateLimitKey::ip("192.168.1.1");
        assert_eq!(key.scope, RateLimitScope::Ip);
        assert!(key.resource.is_none());
        assert_eq!(key.to_redis_key(), "curhatin:ratelimit:ip:192.168.1.1");
    }

    #[test]
    fn chat_key_is_user_scoped_with_resource() {
        let user_id = UserId::new("user-456").unwrap();
        let key = RateLimitKey::chat_messages(&user_id);
        assert_eq!(key.scope, RateLimitScope::User);
        assert_eq!(key.resource.as_deref(), Some(CHAT_MESSAGES_RESOURCE));
        assert_eq!(
            key.to_redis_key(),
            "curhatin:ratelimit:user:user-456:chat_messages"
        );
    }

    #[test]
    fn user_and_chat_keys_differ() {
        let user_id = UserId::new("user-1").unwrap();
        assert_ne!(RateLimitKey::user(&user_id), RateLimitKey::chat_messages(&user_id));
    }

    #[test]
    fn result_predicates() {
        let allowed = RateLimitResult::Allowed(RateLimitStatus {
            limit: 10,
            remaining: 9,
            reset_at: Timestamp::now(),
            window_secs: 60,
        });
        assert!(allowed.is_allowed());

        let denied = RateLimitResult::Denied(RateLimitDenied {
            limit: 10,
            retry_after_secs: 30,
            scope: RateLimitScope::User,
            message: "slow down".to_string(),
        });
        assert!(denied.is_denied());
    }
}
