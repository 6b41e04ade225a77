//! Domain services (business logic)

pub mod permission_filter;
pub mod menu_cache;
pub mod menu_resolver;
pub mod breadcrumb;
pub mod dashboard_composer;
pub mod menu_template_service;
pub mod unified_template_service;

pub use permission_filter::filter_menu;
pub use menu_cache::{CacheStats, CachedMenuEntry, MenuCache};
pub use menu_resolver::MenuResolver;
pub use breadcrumb::{fallback_trail, find_path, normalize_route, BreadcrumbBuilder};
pub use dashboard_composer::{aggregate_requirements, validate_bindings, DashboardComposer};
pub use menu_template_service::MenuTemplateService;
pub use unified_template_service::UnifiedTemplateService;
