//! HTTP adapter for journal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateJournalEntryRequest, JournalEntryResponse, UpdateJournalEntryRequest};
pub use handlers::JournalHandlers;
pub use routes::journal_routes;
