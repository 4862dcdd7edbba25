//! HTTP middleware for axum.
//!
//! - `auth` - Bearer token validation and the `RequireAuth` extractor
//! - `rate_limit` - Per-IP and per-user request budgets

pub mod auth;
pub mod rate_limit;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use rate_limit::{rate_limit_middleware, RateLimitCheck, RateLimitRejection, RateLimiterState};
