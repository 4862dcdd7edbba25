//! Chat session handlers.

mod create_chat_session;
mod get_chat_session;
mod list_chat_sessions;
mod send_chat_message;
mod session_locks;

pub use create_chat_session::{CreateChatSessionCommand, CreateChatSessionHandler};
pub use get_chat_session::{GetChatSessionHandler, GetChatSessionQuery};
pub use list_chat_sessions::{ListChatSessionsHandler, ListChatSessionsQuery};
pub use send_chat_message::{SendChatMessageCommand, SendChatMessageHandler};
pub use session_locks::{SessionLockGuard, SessionLocks};
