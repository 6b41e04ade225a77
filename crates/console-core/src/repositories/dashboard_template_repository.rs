//! Unified/dashboard template repository trait (port)

use async_trait::async_trait;
use crate::domain::{DashboardTemplate, UnifiedTemplateRecord};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardTemplateRepository: Send + Sync {
    async fn find_unified(&self, id: &str) -> Result<Option<UnifiedTemplateRecord>, DomainError>;
    async fn list_dashboards(&self, unified_template_id: &str) -> Result<Vec<DashboardTemplate>, DomainError>;
}
