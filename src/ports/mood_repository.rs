//! Mood repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::mood::Mood;
use async_trait::async_trait;

#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// Save a new mood check-in.
    async fn save(&self, mood: &Mood) -> Result<(), DomainError>;

    /// All check-ins for a user, newest first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Mood>, DomainError>;
}
