//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - OpenAI-compatible text generation, plus a mock
//! - `auth` - JWT bearer token validation, plus a mock
//! - `http` - axum routes and middleware
//! - `memory` - In-memory repositories (default backend, tests)
//! - `postgres` - sqlx repositories
//! - `rate_limiter` - In-memory and Redis fixed-window limiters

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod rate_limiter;
