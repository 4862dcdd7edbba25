//! HTTP adapter for chat session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatMessageResponse, ChatSessionResponse, CreateChatSessionRequest, SendMessageRequest,
};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
