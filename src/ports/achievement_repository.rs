//! Achievement repository port.

use crate::domain::achievement::Achievement;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Record an unlocked achievement.
    async fn save(&self, achievement: &Achievement) -> Result<(), DomainError>;

    /// All achievements for a user, most recently unlocked first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Achievement>, DomainError>;
}
