//! Application handlers.
//!
//! One command or query handler per operation, grouped by module.

pub mod achievement;
pub mod assessment;
pub mod chat;
pub mod counselor;
pub mod journal;
pub mod mood;

pub use achievement::{ListAchievementsHandler, ListAchievementsQuery};
pub use assessment::{
    ListAssessmentsHandler, ListAssessmentsQuery, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
pub use chat::{
    CreateChatSessionCommand, CreateChatSessionHandler, GetChatSessionHandler,
    GetChatSessionQuery, ListChatSessionsHandler, ListChatSessionsQuery, SendChatMessageCommand,
    SendChatMessageHandler, SessionLocks,
};
pub use counselor::{GetCounselorHandler, GetCounselorQuery, ListCounselorsHandler};
pub use journal::{
    CreateJournalEntryCommand, CreateJournalEntryHandler, DeleteJournalEntryCommand,
    DeleteJournalEntryHandler, ListJournalEntriesHandler, ListJournalEntriesQuery,
    UpdateJournalEntryCommand, UpdateJournalEntryHandler,
};
pub use mood::{ListMoodsHandler, ListMoodsQuery, RecordMoodCommand, RecordMoodHandler};
