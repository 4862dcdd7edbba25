//! Journal handlers. Every operation is scoped to the entry's owner;
//! entries belonging to someone else are reported as not found.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, ErrorCode, JournalEntryId, RecordError, UserId,
};
use crate::domain::journal::{JournalEntry, JournalUpdate};
use crate::domain::mood::MoodKind;
use crate::ports::JournalRepository;

const KIND: &str = "Journal entry";

fn map_repo_error(id: &JournalEntryId, err: DomainError) -> RecordError {
    if err.code == ErrorCode::JournalEntryNotFound {
        RecordError::not_found(KIND, id)
    } else {
        err.into()
    }
}

/// Loads an entry only if `user_id` owns it.
async fn find_owned(
    repository: &dyn JournalRepository,
    id: &JournalEntryId,
    user_id: &UserId,
) -> Result<JournalEntry, RecordError> {
    repository
        .find_by_id(id)
        .await?
        .filter(|entry| entry.is_owner(user_id))
        .ok_or_else(|| RecordError::not_found(KIND, id))
}

#[derive(Debug, Clone)]
pub struct CreateJournalEntryCommand {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub mood: Option<MoodKind>,
}

pub struct CreateJournalEntryHandler {
    repository: Arc<dyn JournalRepository>,
}

impl CreateJournalEntryHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateJournalEntryCommand) -> Result<JournalEntry, RecordError> {
        let entry = JournalEntry::new(cmd.user_id, cmd.title, cmd.content, cmd.mood)?;
        self.repository.save(&entry).await?;
        Ok(entry)
    }
}

#[derive(Debug, Clone)]
pub struct ListJournalEntriesQuery {
    pub user_id: UserId,
}

pub struct ListJournalEntriesHandler {
    repository: Arc<dyn JournalRepository>,
}

impl ListJournalEntriesHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListJournalEntriesQuery,
    ) -> Result<Vec<JournalEntry>, RecordError> {
        Ok(self.repository.find_by_user_id(&query.user_id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateJournalEntryCommand {
    pub entry_id: JournalEntryId,
    pub user_id: UserId,
    pub update: JournalUpdate,
}

pub struct UpdateJournalEntryHandler {
    repository: Arc<dyn JournalRepository>,
}

impl UpdateJournalEntryHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateJournalEntryCommand) -> Result<JournalEntry, RecordError> {
        let mut entry = find_owned(self.repository.as_ref(), &cmd.entry_id, &cmd.user_id).await?;

        if cmd.update.is_empty() {
            return Ok(entry);
        }

        entry.apply(cmd.update)?;
        self.repository
            .update(&entry)
            .await
            .map_err(|e| map_repo_error(&cmd.entry_id, e))?;
        Ok(entry)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteJournalEntryCommand {
    pub entry_id: JournalEntryId,
    pub user_id: UserId,
}

pub struct DeleteJournalEntryHandler {
    repository: Arc<dyn JournalRepository>,
}

impl DeleteJournalEntryHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteJournalEntryCommand) -> Result<(), RecordError> {
        find_owned(self.repository.as_ref(), &cmd.entry_id, &cmd.user_id).await?;
        self.repository
            .delete(&cmd.entry_id)
            .await
            .map_err(|e| map_repo_error(&cmd.entry_id, e))?;

        tracing::info!(entry_id = %cmd.entry_id, "Journal entry deleted");
        Ok(())
    }
}
