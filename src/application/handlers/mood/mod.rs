//! Mood check-in handlers.

use std::sync::Arc;

use crate::domain::foundation::{RecordError, UserId};
use crate::domain::mood::{Mood, MoodKind};
use crate::ports::MoodRepository;

#[derive(Debug, Clone)]
pub struct RecordMoodCommand {
    pub user_id: UserId,
    pub mood: MoodKind,
    pub note: Option<String>,
}

pub struct RecordMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl RecordMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordMoodCommand) -> Result<Mood, RecordError> {
        let mood = Mood::record(cmd.user_id, cmd.mood, cmd.note)?;
        self.repository.save(&mood).await?;
        Ok(mood)
    }
}

#[derive(Debug, Clone)]
pub struct ListMoodsQuery {
    pub user_id: UserId,
}

pub struct ListMoodsHandler {
    repository: Arc<dyn MoodRepository>,
}

impl ListMoodsHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListMoodsQuery) -> Result<Vec<Mood>, RecordError> {
        Ok(self.repository.find_by_user_id(&query.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMoodRepository;
    use crate::domain::mood::MAX_NOTE_CHARS;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn recorded_moods_are_listed_newest_first() {
        let repo = Arc::new(InMemoryMoodRepository::new());
        let record = RecordMoodHandler::new(repo.clone());
        let list = ListMoodsHandler::new(repo);

        for mood in [MoodKind::Sad, MoodKind::Happy] {
            record
                .handle(RecordMoodCommand {
                    user_id: user(),
                    mood,
                    note: None,
                })
                .await
                .unwrap();
        }

        let moods = list.handle(ListMoodsQuery { user_id: user() }).await.unwrap();
        assert_eq!(moods.len(), 2);
        assert_eq!(moods[0].mood(), MoodKind::Happy);
    }

    #[tokio::test]
    async fn overlong_note_is_a_validation_error() {
        let repo = Arc::new(InMemoryMoodRepository::new());
        let record = RecordMoodHandler::new(repo.clone());

        let result = record
            .handle(RecordMoodCommand {
                user_id: user(),
                mood: MoodKind::Neutral,
                note: Some("a".repeat(MAX_NOTE_CHARS + 1)),
            })
            .await;

        assert!(matches!(result, Err(RecordError::Validation(_))));
        assert!(repo.find_by_user_id(&user()).await.unwrap().is_empty());
    }
}
