//! HTTP routes for journal endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_journal_entry, delete_journal_entry, list_journal_entries, update_journal_entry,
    JournalHandlers,
};

pub fn journal_routes(handlers: JournalHandlers) -> Router {
    Router::new()
        .route("/", get(list_journal_entries).post(create_journal_entry))
        .route("/:id", put(update_journal_entry).delete(delete_journal_entry))
        .with_state(handlers)
}
