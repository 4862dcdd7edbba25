//! Achievement listing. Achievements are display state; nothing on the
//! server unlocks them.

use std::sync::Arc;

use crate::domain::achievement::Achievement;
use crate::domain::foundation::{RecordError, UserId};
use crate::ports::AchievementRepository;

#[derive(Debug, Clone)]
pub struct ListAchievementsQuery {
    pub user_id: UserId,
}

pub struct ListAchievementsHandler {
    repository: Arc<dyn AchievementRepository>,
}

impl ListAchievementsHandler {
    pub fn new(repository: Arc<dyn AchievementRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListAchievementsQuery) -> Result<Vec<Achievement>, RecordError> {
        Ok(self.repository.find_by_user_id(&query.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAchievementRepository;

    #[tokio::test]
    async fn lists_callers_achievements() {
        let repo = Arc::new(InMemoryAchievementRepository::new());
        let user = UserId::new("user-1").unwrap();
        let badge = Achievement::unlock(
            user.clone(),
            "first-journal".to_string(),
            "Penulis Pemula".to_string(),
            "Menulis jurnal pertama".to_string(),
            "📝".to_string(),
        )
        .unwrap();
        repo.save(&badge).await.unwrap();

        let handler = ListAchievementsHandler::new(repo);
        let list = handler
            .handle(ListAchievementsQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(list, vec![badge]);
    }
}
