//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ChatSessionRepository` - Chat sessions with conditional update
//! - `AssessmentRepository` - Stored SRQ-29 results
//! - `MoodRepository`, `JournalRepository`, `AchievementRepository` - Personal records
//! - `CounselorDirectory` - Read-only counselor listing
//!
//! ## External Service Ports
//!
//! - `AIProvider` - Text generation for the AI counselor
//! - `SessionValidator` - Bearer token validation
//! - `RateLimiter` - Fixed-window request limits

mod achievement_repository;
mod ai_provider;
mod assessment_repository;
mod chat_session_repository;
mod counselor_directory;
mod journal_repository;
mod mood_repository;
mod rate_limiter;
mod session_validator;

pub use achievement_repository::AchievementRepository;
pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use assessment_repository::AssessmentRepository;
pub use chat_session_repository::ChatSessionRepository;
pub use counselor_directory::CounselorDirectory;
pub use journal_repository::JournalRepository;
pub use mood_repository::MoodRepository;
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter, CHAT_MESSAGES_RESOURCE,
};
pub use session_validator::SessionValidator;
