//! Menu template repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuTemplate;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuTemplateRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuTemplate>, DomainError>;
    async fn list(&self) -> Result<Vec<MenuTemplate>, DomainError>;
    async fn create(&self, template: &MenuTemplate) -> Result<MenuTemplate, DomainError>;
    /// Full replacement of the stored template
    async fn update(&self, template: &MenuTemplate) -> Result<MenuTemplate, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
