//! In-memory rate limiter for tests and single-node deployments.
//!
//! Fixed-window counters in a `HashMap` behind a tokio `RwLock`. Expired
//! windows are swept at most once per window so idle keys do not pile up.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter,
};

use super::config::RateLimitConfig;

#[derive(Debug, Clone)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    windows: Arc<RwLock<Windows>>,
}

#[derive(Debug)]
struct Windows {
    counters: HashMap<String, WindowState>,
    /// Unix seconds of the last expiry sweep.
    last_sweep: u64,
}

#[derive(Debug, Clone)]
struct WindowState {
    count: u32,
    /// Unix seconds.
    window_start: u64,
}

impl Windows {
    /// Drops every counter whose window has closed.
    fn sweep(&mut self, now: u64, window_secs: u64) {
        if now < self.last_sweep + window_secs {
            return;
        }
        self.counters
            .retain(|_, state| now < state.window_start + window_secs);
        self.last_sweep = now;
    }
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(RwLock::new(Windows {
                counters: HashMap::new(),
                last_sweep: Self::now_secs(),
            })),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(RateLimitConfig::default())
    }

    fn now_secs() -> u64 {
        Timestamp::now().as_unix_secs()
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError> {
        let (limit, window_secs) = self.config.limits_for(&key);
        let now = Self::now_secs();

        let mut windows = self.windows.write().await;
        windows.sweep(now, self.config.window_secs as u64);

        let state = windows
            .counters
            .entry(key.to_redis_key())
            .or_insert(WindowState {
                count: 0,
                window_start: now,
            });

        let window_end = state.window_start + window_secs as u64;
        if now >= window_end {
            state.count = 0;
            state.window_start = now;
        }
        let window_end = state.window_start + window_secs as u64;

        if state.count >= limit {
            let retry_after = (window_end.saturating_sub(now) as u32).max(1);
            return Ok(RateLimitResult::Denied(RateLimitDenied {
                limit,
                retry_after_secs: retry_after,
                scope: key.scope,
                message: format!(
                    "Rate limit exceeded for {}. Retry after {} seconds.",
                    key.scope, retry_after
                ),
            }));
        }

        state.count += 1;
        Ok(RateLimitResult::Allowed(RateLimitStatus {
            limit,
            remaining: limit.saturating_sub(state.count),
            reset_at: Timestamp::from_unix_secs(window_end),
            window_secs,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn limiter(chat_messages: u32) -> InMemoryRateLimiter {
        InMemoryRateLimiter::new(RateLimitConfig {
            per_ip: 3,
            per_user: 5,
            chat_messages,
            window_secs: 60,
        })
    }

    #[tokio::test]
    async fn allows_until_limit_then_denies() {
        let limiter = limiter(2);
        let key = RateLimitKey::ip("10.0.0.1");

        for expected_remaining in [2, 1, 0] {
            match limiter.check(key.clone()).await.unwrap() {
                RateLimitResult::Allowed(status) => {
                    assert_eq!(status.remaining, expected_remaining)
                }
                RateLimitResult::Denied(_) => panic!("should be allowed"),
            }
        }

        match limiter.check(key).await.unwrap() {
            RateLimitResult::Denied(denied) => {
                assert_eq!(denied.limit, 3);
                assert!(denied.retry_after_secs >= 1);
            }
            RateLimitResult::Allowed(_) => panic!("should be denied"),
        }
    }

    #[tokio::test]
    async fn keys_are_counted_separately() {
        let limiter = limiter(1);
        let user = UserId::new("user-1").unwrap();

        assert!(limiter.check(RateLimitKey::chat_messages(&user)).await.unwrap().is_allowed());
        assert!(limiter.check(RateLimitKey::chat_messages(&user)).await.unwrap().is_denied());
        assert!(limiter.check(RateLimitKey::user(&user)).await.unwrap().is_allowed());
    }

    #[tokio::test]
    async fn expired_windows_are_swept() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            per_ip: 3,
            per_user: 5,
            chat_messages: 1,
            window_secs: 1,
        });

        for n in 0..50 {
            let ip = format!("10.0.0.{}", n);
            assert!(limiter.check(RateLimitKey::ip(&ip)).await.unwrap().is_allowed());
        }
        assert_eq!(limiter.windows.read().await.counters.len(), 50);

        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

        assert!(limiter.check(RateLimitKey::ip("10.0.1.1")).await.unwrap().is_allowed());
        let windows = limiter.windows.read().await;
        assert_eq!(windows.counters.len(), 1);
        assert!(windows.counters.contains_key(&RateLimitKey::ip("10.0.1.1").to_redis_key()));
    }
}
