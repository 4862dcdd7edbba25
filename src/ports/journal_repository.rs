//! Journal repository port.

use crate::domain::foundation::{DomainError, JournalEntryId, UserId};
use crate::domain::journal::JournalEntry;
use async_trait::async_trait;

#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Save a new entry.
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError>;

    /// Overwrite an existing entry.
    ///
    /// # Errors
    ///
    /// - `JournalEntryNotFound` if the entry doesn't exist
    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError>;

    /// Find an entry by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &JournalEntryId) -> Result<Option<JournalEntry>, DomainError>;

    /// All entries for a user, newest first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError>;

    /// Delete an entry.
    ///
    /// # Errors
    ///
    /// - `JournalEntryNotFound` if the entry doesn't exist
    async fn delete(&self, id: &JournalEntryId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn JournalRepository) {}
    }
}
