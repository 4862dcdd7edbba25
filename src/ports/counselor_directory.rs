//! Read-only counselor directory port.

use crate::domain::counselor::Counselor;
use crate::domain::foundation::{CounselorId, DomainError};
use async_trait::async_trait;

#[async_trait]
pub trait CounselorDirectory: Send + Sync {
    /// All counselors, in directory order.
    async fn list(&self) -> Result<Vec<Counselor>, DomainError>;

    /// Find a counselor by id. Returns `None` if unknown.
    async fn find_by_id(&self, id: &CounselorId) -> Result<Option<Counselor>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counselor_directory_is_object_safe() {
        fn _accepts_dyn(_dir: &dyn CounselorDirectory) {}
    }
}
