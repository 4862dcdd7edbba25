//! In-memory AchievementRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::achievement::Achievement;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AchievementRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAchievementRepository {
    achievements: Arc<RwLock<Vec<Achievement>>>,
}

impl InMemoryAchievementRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AchievementRepository for InMemoryAchievementRepository {
    async fn save(&self, achievement: &Achievement) -> Result<(), DomainError> {
        self.achievements.write().await.push(achievement.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Achievement>, DomainError> {
        let mut found: Vec<Achievement> = self
            .achievements
            .read()
            .await
            .iter()
            .rev()
            .filter(|a| a.user_id() == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.unlocked_at().cmp(a.unlocked_at()));
        Ok(found)
    }
}
