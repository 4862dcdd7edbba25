//! Chat sessions with the AI counselor or a human counselor.

mod errors;
mod message;
mod persona;
mod session;

pub use errors::ChatError;
pub use message::{ChatMessage, ChatRole};
pub use persona::{AI_EMPTY_REPLY_FALLBACK, AI_ERROR_FALLBACK, COUNSELOR_SYSTEM_PROMPT};
pub use session::{validate_user_message, ChatSession, DEFAULT_MAX_MESSAGE_CHARS};
