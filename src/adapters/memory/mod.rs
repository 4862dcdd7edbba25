//! In-process adapters for the repository ports.
//!
//! Used by tests and by the `memory` database backend. Data lives only as
//! long as the process.

mod achievement_repository;
mod assessment_repository;
mod chat_session_repository;
mod counselor_directory;
mod journal_repository;
mod mood_repository;

pub use achievement_repository::InMemoryAchievementRepository;
pub use assessment_repository::InMemoryAssessmentRepository;
pub use chat_session_repository::InMemoryChatSessionRepository;
pub use counselor_directory::InMemoryCounselorDirectory;
pub use journal_repository::InMemoryJournalRepository;
pub use mood_repository::InMemoryMoodRepository;
