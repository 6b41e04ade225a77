// ============================================================================
// Console Core - Menu Template Service
// File: crates/console-core/src/services/menu_template_service.rs
// ============================================================================
//! Admin operations on menu templates and study assignments. Every write
//! evicts the cached menus built from the affected template.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{MenuNode, MenuTemplate, StudyRecord};
use crate::error::DomainError;
use crate::repositories::{MenuTemplateRepository, StudyRepository};
use crate::services::menu_cache::MenuCache;

pub struct MenuTemplateService {
    templates: Arc<dyn MenuTemplateRepository>,
    studies: Arc<dyn StudyRepository>,
    cache: MenuCache,
}

impl MenuTemplateService {
    pub fn new(
        templates: Arc<dyn MenuTemplateRepository>,
        studies: Arc<dyn StudyRepository>,
        cache: MenuCache,
    ) -> Self {
        Self {
            templates,
            studies,
            cache,
        }
    }

    pub async fn list(&self) -> Result<Vec<MenuTemplate>, DomainError> {
        self.templates.list().await
    }

    pub async fn get(&self, id: &str) -> Result<MenuTemplate, DomainError> {
        self.templates
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::MenuTemplateNotFound(id.to_string()))
    }

    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
        items: Vec<MenuNode>,
        created_by: Option<String>,
    ) -> Result<MenuTemplate, DomainError> {
        let template = MenuTemplate::new(name, description, items, created_by)?;
        let created = self.templates.create(&template).await?;
        info!("Menu template created: {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Replaces the whole item tree
    pub async fn replace_items(
        &self,
        id: &str,
        items: Vec<MenuNode>,
    ) -> Result<MenuTemplate, DomainError> {
        let mut template = self.get(id).await?;
        template.replace_items(items)?;

        let updated = self.templates.update(&template).await?;
        self.cache.invalidate_template(id);
        info!("Menu template {} items replaced", id);
        Ok(updated)
    }

    pub async fn set_active(&self, id: &str, active: bool) -> Result<MenuTemplate, DomainError> {
        let mut template = self.get(id).await?;
        template.set_active(active);

        let updated = self.templates.update(&template).await?;
        self.cache.invalidate_template(id);
        Ok(updated)
    }

    /// Blocked while any study still references the template
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let template = self.get(id).await?;
        if !template.can_delete() {
            warn!(
                "Refusing to delete menu template {}: used by {} studies",
                id, template.studies_count
            );
            return Err(DomainError::TemplateInUse {
                template_id: id.to_string(),
                studies_count: template.studies_count,
            });
        }

        self.templates.delete(id).await?;
        self.cache.invalidate_template(id);
        info!("Menu template deleted: {}", id);
        Ok(())
    }

    /// Points a study at a template, or clears the assignment with `None`
    pub async fn assign_to_study(
        &self,
        study_id: &str,
        template_id: Option<String>,
    ) -> Result<StudyRecord, DomainError> {
        if let Some(template_id) = template_id.as_deref() {
            // reject unknown templates up front
            self.get(template_id).await?;
        }

        let study = self
            .studies
            .assign_menu_template(study_id, template_id)
            .await?;
        self.cache.invalidate(study_id);
        info!(
            "Study {} menu template set to {:?}",
            study_id, study.menu_template_id
        );
        Ok(study)
    }
}
