//! Rate limiter adapters.
//!
//! - `InMemoryRateLimiter` - Single node, also used in tests
//! - `RedisRateLimiter` - Shared counters in Redis

mod config;
mod in_memory;
mod redis;

pub use config::RateLimitConfig;
pub use in_memory::InMemoryRateLimiter;
pub use redis::RedisRateLimiter;
