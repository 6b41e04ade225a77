//! Loads a unified template and its parts from upstream, then composes them

use std::sync::Arc;
use tracing::info;

use crate::domain::UnifiedTemplateView;
use crate::error::DomainError;
use crate::repositories::{DashboardTemplateRepository, MenuTemplateRepository};
use crate::services::dashboard_composer::DashboardComposer;

pub struct UnifiedTemplateService {
    dashboards: Arc<dyn DashboardTemplateRepository>,
    templates: Arc<dyn MenuTemplateRepository>,
    composer: DashboardComposer,
}

impl UnifiedTemplateService {
    pub fn new(
        dashboards: Arc<dyn DashboardTemplateRepository>,
        templates: Arc<dyn MenuTemplateRepository>,
        composer: DashboardComposer,
    ) -> Self {
        Self {
            dashboards,
            templates,
            composer,
        }
    }

    pub async fn compose_by_id(&self, id: &str) -> Result<UnifiedTemplateView, DomainError> {
        info!("Composing unified template {}", id);

        let record = self
            .dashboards
            .find_unified(id)
            .await?
            .ok_or_else(|| DomainError::UnifiedTemplateNotFound(id.to_string()))?;

        let menu_template = self
            .templates
            .find_by_id(&record.menu_template_id)
            .await?
            .ok_or_else(|| DomainError::MenuTemplateNotFound(record.menu_template_id.clone()))?;

        let dashboards = self.dashboards.list_dashboards(id).await?;
        let template = self.composer.compose(menu_template, dashboards).await?;

        Ok(UnifiedTemplateView { record, template })
    }
}
