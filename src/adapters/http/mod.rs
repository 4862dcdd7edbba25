//! HTTP adapter: axum routes, middleware and the JSON error shape.
//!
//! Each resource module owns its DTOs, handlers and routes; `router`
//! stitches them together under `/api`.

pub mod achievement;
pub mod assessment;
pub mod auth;
pub mod chat;
pub mod counselor;
pub mod error;
pub mod journal;
pub mod middleware;
pub mod mood;
pub mod router;

pub use error::ErrorResponse;
pub use router::{build_router, health, AppServices};
