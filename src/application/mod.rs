//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Write
//! operations take a command, reads take a query.

pub mod handlers;

pub use handlers::*;
