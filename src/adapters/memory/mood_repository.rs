//! In-memory MoodRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::mood::Mood;
use crate::ports::MoodRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryMoodRepository {
    moods: Arc<RwLock<Vec<Mood>>>,
}

impl InMemoryMoodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodRepository for InMemoryMoodRepository {
    async fn save(&self, mood: &Mood) -> Result<(), DomainError> {
        self.moods.write().await.push(mood.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Mood>, DomainError> {
        let mut found: Vec<Mood> = self
            .moods
            .read()
            .await
            .iter()
            .rev()
            .filter(|m| m.user_id() == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(found)
    }
}
