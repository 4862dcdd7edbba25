//! Counselor directory queries.

use std::sync::Arc;

use crate::domain::counselor::Counselor;
use crate::domain::foundation::{CounselorId, RecordError};
use crate::ports::CounselorDirectory;

pub struct ListCounselorsHandler {
    directory: Arc<dyn CounselorDirectory>,
}

impl ListCounselorsHandler {
    pub fn new(directory: Arc<dyn CounselorDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self) -> Result<Vec<Counselor>, RecordError> {
        Ok(self.directory.list().await?)
    }
}

#[derive(Debug, Clone)]
pub struct GetCounselorQuery {
    pub counselor_id: CounselorId,
}

pub struct GetCounselorHandler {
    directory: Arc<dyn CounselorDirectory>,
}

impl GetCounselorHandler {
    pub fn new(directory: Arc<dyn CounselorDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: GetCounselorQuery) -> Result<Counselor, RecordError> {
        self.directory
            .find_by_id(&query.counselor_id)
            .await?
            .ok_or_else(|| RecordError::not_found("Counselor", &query.counselor_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCounselorDirectory;

    #[tokio::test]
    async fn seeded_directory_is_listed_and_looked_up() {
        let directory = Arc::new(InMemoryCounselorDirectory::seeded());
        let list = ListCounselorsHandler::new(directory.clone());
        let get = GetCounselorHandler::new(directory);

        assert_eq!(list.handle().await.unwrap().len(), 3);

        let budi = get
            .handle(GetCounselorQuery {
                counselor_id: CounselorId::new("budi-santoso").unwrap(),
            })
            .await
            .unwrap();
        assert!(!budi.is_online);

        let missing = get
            .handle(GetCounselorQuery {
                counselor_id: CounselorId::new("nobody").unwrap(),
            })
            .await;
        assert!(matches!(missing, Err(RecordError::NotFound { .. })));
    }
}
