//! ListAssessmentsHandler - The caller's assessment history, newest first.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::UserId;
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct ListAssessmentsQuery {
    pub user_id: UserId,
}

pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListAssessmentsQuery) -> Result<Vec<Assessment>, AssessmentError> {
        Ok(self.repository.find_by_user_id(&query.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentRepository;

    #[tokio::test]
    async fn lists_only_callers_assessments() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let ayu = UserId::new("ayu").unwrap();
        let budi = UserId::new("budi").unwrap();
        repo.save(&Assessment::record(ayu.clone(), vec![false; 29]).unwrap())
            .await
            .unwrap();
        repo.save(&Assessment::record(budi, vec![true; 29]).unwrap())
            .await
            .unwrap();

        let handler = ListAssessmentsHandler::new(repo);
        let list = handler
            .handle(ListAssessmentsQuery { user_id: ayu.clone() })
            .await
            .unwrap();

        assert_eq!(list.len(), 1);
        assert!(list[0].is_owner(&ayu));
    }
}
