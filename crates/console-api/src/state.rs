use std::sync::Arc;

use console_core::repositories::{
    DashboardTemplateRepository, MenuTemplateRepository, StudyRepository, WidgetCatalog,
};
use console_core::services::{
    BreadcrumbBuilder, DashboardComposer, MenuCache, MenuResolver, MenuTemplateService,
    UnifiedTemplateService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_resolver: Arc<MenuResolver>,
    pub menu_templates: Arc<MenuTemplateService>,
    pub unified_templates: Arc<UnifiedTemplateService>,
    pub breadcrumbs: Arc<BreadcrumbBuilder>,
    pub menu_cache: MenuCache,
}

impl AppState {
    /// Wires every service on top of the given repositories and shared cache
    pub fn from_repositories(
        studies: Arc<dyn StudyRepository>,
        templates: Arc<dyn MenuTemplateRepository>,
        dashboards: Arc<dyn DashboardTemplateRepository>,
        catalog: Arc<dyn WidgetCatalog>,
        menu_cache: MenuCache,
        breadcrumbs: BreadcrumbBuilder,
    ) -> Self {
        let menu_resolver = MenuResolver::new(studies.clone(), templates.clone(), menu_cache.clone());
        let menu_templates = MenuTemplateService::new(templates.clone(), studies, menu_cache.clone());
        let unified_templates =
            UnifiedTemplateService::new(dashboards, templates, DashboardComposer::new(catalog));

        Self {
            menu_resolver: Arc::new(menu_resolver),
            menu_templates: Arc::new(menu_templates),
            unified_templates: Arc::new(unified_templates),
            breadcrumbs: Arc::new(breadcrumbs),
            menu_cache,
        }
    }
}
