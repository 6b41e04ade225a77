//! Remote unified/dashboard template repository

use async_trait::async_trait;

use console_core::domain::{DashboardTemplate, UnifiedTemplateRecord};
use console_core::error::DomainError;
use console_core::repositories::DashboardTemplateRepository;

use super::RemoteApiClient;

pub struct RemoteDashboardTemplateRepository {
    client: RemoteApiClient,
}

impl RemoteDashboardTemplateRepository {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardTemplateRepository for RemoteDashboardTemplateRepository {
    async fn find_unified(&self, id: &str) -> Result<Option<UnifiedTemplateRecord>, DomainError> {
        self.client.get_optional(&["unified-templates", id]).await
    }

    async fn list_dashboards(&self, unified_template_id: &str) -> Result<Vec<DashboardTemplate>, DomainError> {
        self.client
            .get_optional(&["unified-templates", unified_template_id, "dashboards"])
            .await?
            .ok_or_else(|| DomainError::UnifiedTemplateNotFound(unified_template_id.to_string()))
    }
}
