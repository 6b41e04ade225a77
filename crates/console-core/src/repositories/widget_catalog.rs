//! Widget catalog trait (port)

use async_trait::async_trait;
use crate::domain::WidgetDefinition;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WidgetCatalog: Send + Sync {
    async fn find_definition(&self, widget_id: &str) -> Result<Option<WidgetDefinition>, DomainError>;
}
