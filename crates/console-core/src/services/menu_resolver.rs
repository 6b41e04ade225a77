// ============================================================================
// Console Core - Menu Resolver
// File: crates/console-core/src/services/menu_resolver.rs
// ============================================================================
//! Resolves the permission-filtered navigation tree of a study

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::{MenuNode, PermissionSet, ResolvedMenu};
use crate::error::DomainError;
use crate::repositories::{MenuTemplateRepository, StudyRepository};
use crate::services::menu_cache::MenuCache;
use crate::services::permission_filter::filter_menu;

/// Study menu resolution: study lookup -> cached raw tree -> permission filter
pub struct MenuResolver {
    studies: Arc<dyn StudyRepository>,
    templates: Arc<dyn MenuTemplateRepository>,
    cache: MenuCache,
}

impl MenuResolver {
    pub fn new(
        studies: Arc<dyn StudyRepository>,
        templates: Arc<dyn MenuTemplateRepository>,
        cache: MenuCache,
    ) -> Self {
        Self {
            studies,
            templates,
            cache,
        }
    }

    pub fn cache(&self) -> &MenuCache {
        &self.cache
    }

    /// Menu visible to a caller holding `granted`.
    /// A study without an assigned template resolves to an empty menu.
    pub async fn resolve(
        &self,
        study_id: &str,
        granted: &PermissionSet,
    ) -> Result<Vec<MenuNode>, DomainError> {
        let raw = self.raw_items(study_id).await?;
        Ok(filter_menu(&raw, granted))
    }

    /// Unfiltered tree for the study, served from cache when still valid
    pub async fn raw_items(&self, study_id: &str) -> Result<Arc<Vec<MenuNode>>, DomainError> {
        Ok(self.load(study_id).await?.unwrap_or_default())
    }

    /// `None` when the study has no menu template assigned
    async fn load(&self, study_id: &str) -> Result<Option<Arc<Vec<MenuNode>>>, DomainError> {
        // 1. Study lookup
        let study = self
            .studies
            .find_by_id(study_id)
            .await
            .map_err(|e| DomainError::resolution(study_id, e))?
            .ok_or_else(|| {
                DomainError::resolution(study_id, DomainError::StudyNotFound(study_id.to_string()))
            })?;

        let Some(template_id) = study.menu_template_id else {
            debug!("Study {} has no menu template assigned", study_id);
            return Ok(None);
        };

        // 2. Cache, ignoring entries built from a previously assigned template
        if let Some(entry) = self.cache.get(study_id) {
            if entry.template_id == template_id {
                return Ok(Some(entry.items));
            }
            debug!(
                "Study {} now uses template {} (cached {}), refetching",
                study_id, template_id, entry.template_id
            );
        }

        info!("Fetching menu template {} for study {}", template_id, study_id);
        let template = self
            .templates
            .find_by_id(&template_id)
            .await
            .map_err(|e| DomainError::resolution(study_id, e))?
            .ok_or_else(|| {
                DomainError::resolution(study_id, DomainError::MenuTemplateNotFound(template_id.clone()))
            })?;

        let entry = self.cache.put(study_id, &template_id, template.items);
        Ok(Some(entry.items))
    }

    /// Drops the cached tree, then resolves again from upstream
    pub async fn refetch(
        &self,
        study_id: &str,
        granted: &PermissionSet,
    ) -> Result<Vec<MenuNode>, DomainError> {
        self.cache.invalidate(study_id);
        self.resolve(study_id, granted).await
    }

    /// Never fails: errors degrade to an empty menu carrying a status
    pub async fn resolve_view(&self, study_id: &str, granted: &PermissionSet) -> ResolvedMenu {
        match self.load(study_id).await {
            Ok(Some(raw)) => ResolvedMenu::ready(study_id, filter_menu(&raw, granted)),
            Ok(None) => ResolvedMenu::not_configured(study_id),
            Err(e) if e.is_not_found() => {
                warn!("No menu configured for study {}: {}", study_id, e);
                ResolvedMenu::not_configured(study_id)
            }
            Err(e) => {
                error!("Menu resolution failed for study {}: {}", study_id, e);
                ResolvedMenu::unavailable(study_id, e.to_string(), e.is_retryable())
            }
        }
    }

    pub async fn refetch_view(&self, study_id: &str, granted: &PermissionSet) -> ResolvedMenu {
        self.cache.invalidate(study_id);
        self.resolve_view(study_id, granted).await
    }
}
