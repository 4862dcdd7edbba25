//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth types and error types that form
//! the vocabulary of the Curhatin domain.

mod auth;
mod errors;
mod ids;
mod record_error;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AchievementId, AssessmentId, ChatSessionId, CounselorId, JournalEntryId, MessageId, MoodId,
    UserId,
};
pub use record_error::RecordError;
pub use timestamp::Timestamp;
