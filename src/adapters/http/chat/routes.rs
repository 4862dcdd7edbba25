//! HTTP routes for chat session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_chat_session, get_chat_session, list_chat_sessions, send_chat_message, ChatHandlers,
};

pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", get(list_chat_sessions).post(create_chat_session))
        .route("/:id", get(get_chat_session))
        .route("/:id/messages", post(send_chat_message))
        .with_state(handlers)
}
