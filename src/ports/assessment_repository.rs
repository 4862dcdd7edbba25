//! Assessment repository port. Assessments are insert-only.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// All assessments for a user, newest first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }
}
