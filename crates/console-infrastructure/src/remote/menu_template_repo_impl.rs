// ============================================================================
// Console Infrastructure - Remote Menu Template Repository
// File: crates/console-infrastructure/src/remote/menu_template_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use reqwest::Method;
use tracing::{info, warn};

use console_core::domain::MenuTemplate;
use console_core::error::DomainError;
use console_core::repositories::MenuTemplateRepository;

use super::RemoteApiClient;

pub struct RemoteMenuTemplateRepository {
    client: RemoteApiClient,
}

impl RemoteMenuTemplateRepository {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuTemplateRepository for RemoteMenuTemplateRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuTemplate>, DomainError> {
        self.client.get_optional(&["menu-templates", id]).await
    }

    async fn list(&self) -> Result<Vec<MenuTemplate>, DomainError> {
        Ok(self
            .client
            .get_optional(&["menu-templates"])
            .await?
            .unwrap_or_default())
    }

    async fn create(&self, template: &MenuTemplate) -> Result<MenuTemplate, DomainError> {
        info!("Creating menu template: {}", template.name);
        self.client
            .send_json(Method::POST, &["menu-templates"], template)
            .await?
            .ok_or_else(|| DomainError::Upstream("Menu template endpoint not found".into()))
    }

    async fn update(&self, template: &MenuTemplate) -> Result<MenuTemplate, DomainError> {
        self.client
            .send_json(Method::PUT, &["menu-templates", template.id.as_str()], template)
            .await?
            .ok_or_else(|| DomainError::MenuTemplateNotFound(template.id.clone()))
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let deleted = self
            .client
            .send_empty(Method::DELETE, &["menu-templates", id])
            .await?;

        if !deleted {
            warn!("Menu template {} not found on delete", id);
            return Err(DomainError::MenuTemplateNotFound(id.to_string()));
        }
        Ok(())
    }
}
