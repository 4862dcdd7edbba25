//! In-memory CounselorDirectory backed by a fixed list.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::counselor::{seed_counselors, Counselor};
use crate::domain::foundation::{CounselorId, DomainError};
use crate::ports::CounselorDirectory;

#[derive(Debug, Clone)]
pub struct InMemoryCounselorDirectory {
    counselors: Arc<Vec<Counselor>>,
}

impl InMemoryCounselorDirectory {
    pub fn new(counselors: Vec<Counselor>) -> Self {
        Self {
            counselors: Arc::new(counselors),
        }
    }

    /// Directory holding the default counselors.
    pub fn seeded() -> Self {
        Self::new(seed_counselors())
    }
}

impl Default for InMemoryCounselorDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl CounselorDirectory for InMemoryCounselorDirectory {
    async fn list(&self) -> Result<Vec<Counselor>, DomainError> {
        Ok(self.counselors.as_ref().clone())
    }

    async fn find_by_id(&self, id: &CounselorId) -> Result<Option<Counselor>, DomainError> {
        Ok(self.counselors.iter().find(|c| &c.id == id).cloned())
    }
}
