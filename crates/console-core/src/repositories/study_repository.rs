//! Study repository trait (port)

use async_trait::async_trait;
use crate::domain::StudyRecord;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudyRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<StudyRecord>, DomainError>;
    /// `None` clears the assignment
    async fn assign_menu_template(
        &self,
        study_id: &str,
        template_id: Option<String>,
    ) -> Result<StudyRecord, DomainError>;
}
