//! In-memory repositories and router wiring for handler tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use parking_lot::Mutex;

use console_core::domain::{
    DashboardTemplate, MenuTemplate, StudyRecord, UnifiedTemplateRecord, WidgetDefinition,
};
use console_core::repositories::{
    DashboardTemplateRepository, MenuTemplateRepository, StudyRepository, WidgetCatalog,
};
use console_core::services::{BreadcrumbBuilder, MenuCache};
use console_core::DomainError;

use crate::{router, AppState};

#[derive(Default)]
pub struct InMemoryStore {
    pub studies: Mutex<HashMap<String, StudyRecord>>,
    pub templates: Mutex<HashMap<String, MenuTemplate>>,
    pub unified: Mutex<HashMap<String, UnifiedTemplateRecord>>,
    pub dashboards: Mutex<HashMap<String, Vec<DashboardTemplate>>>,
    pub widgets: Mutex<HashMap<String, WidgetDefinition>>,
    pub template_fetches: AtomicUsize,
    pub fail_template_fetch: AtomicBool,
}

impl InMemoryStore {
    pub fn add_study(&self, id: &str, template_id: Option<&str>) {
        self.studies.lock().insert(
            id.to_string(),
            StudyRecord {
                id: id.to_string(),
                name: None,
                menu_template_id: template_id.map(str::to_string),
            },
        );
    }

    pub fn add_template(&self, template: MenuTemplate) {
        self.templates.lock().insert(template.id.clone(), template);
    }

    pub fn fetches(&self) -> usize {
        self.template_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudyRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<StudyRecord>, DomainError> {
        Ok(self.studies.lock().get(id).cloned())
    }

    async fn assign_menu_template(
        &self,
        study_id: &str,
        template_id: Option<String>,
    ) -> Result<StudyRecord, DomainError> {
        let mut studies = self.studies.lock();
        let study = studies
            .get_mut(study_id)
            .ok_or_else(|| DomainError::StudyNotFound(study_id.to_string()))?;
        study.menu_template_id = template_id;
        Ok(study.clone())
    }
}

#[async_trait]
impl MenuTemplateRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuTemplate>, DomainError> {
        if self.fail_template_fetch.load(Ordering::SeqCst) {
            return Err(DomainError::Upstream("remote API unavailable".into()));
        }
        self.template_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.templates.lock().get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<MenuTemplate>, DomainError> {
        Ok(self.templates.lock().values().cloned().collect())
    }

    async fn create(&self, template: &MenuTemplate) -> Result<MenuTemplate, DomainError> {
        self.add_template(template.clone());
        Ok(template.clone())
    }

    async fn update(&self, template: &MenuTemplate) -> Result<MenuTemplate, DomainError> {
        self.add_template(template.clone());
        Ok(template.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.templates
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::MenuTemplateNotFound(id.to_string()))
    }
}

#[async_trait]
impl DashboardTemplateRepository for InMemoryStore {
    async fn find_unified(&self, id: &str) -> Result<Option<UnifiedTemplateRecord>, DomainError> {
        Ok(self.unified.lock().get(id).cloned())
    }

    async fn list_dashboards(&self, unified_template_id: &str) -> Result<Vec<DashboardTemplate>, DomainError> {
        Ok(self
            .dashboards
            .lock()
            .get(unified_template_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl WidgetCatalog for InMemoryStore {
    async fn find_definition(&self, widget_id: &str) -> Result<Option<WidgetDefinition>, DomainError> {
        Ok(self.widgets.lock().get(widget_id).cloned())
    }
}

pub fn test_app(store: Arc<InMemoryStore>) -> Router {
    let state = AppState::from_repositories(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        MenuCache::new(Duration::from_secs(300)),
        BreadcrumbBuilder::new("Home", "/"),
    );
    router(state)
}
