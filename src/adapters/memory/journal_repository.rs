//! In-memory JournalRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, JournalEntryId, UserId};
use crate::domain::journal::JournalEntry;
use crate::ports::JournalRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryJournalRepository {
    entries: Arc<RwLock<HashMap<JournalEntryId, JournalEntry>>>,
}

impl InMemoryJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &JournalEntryId) -> DomainError {
    DomainError::new(
        ErrorCode::JournalEntryNotFound,
        format!("Journal entry not found: {}", id),
    )
}

#[async_trait]
impl JournalRepository for InMemoryJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        self.entries.write().await.insert(*entry.id(), entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        let stored = entries.get_mut(entry.id()).ok_or_else(|| not_found(entry.id()))?;
        *stored = entry.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &JournalEntryId) -> Result<Option<JournalEntry>, DomainError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError> {
        let mut found: Vec<JournalEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|e| e.is_owner(user_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(found)
    }

    async fn delete(&self, id: &JournalEntryId) -> Result<(), DomainError> {
        self.entries
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
