//! Repository traits (ports) for the remote API collaborators

pub mod study_repository;
pub mod menu_template_repository;
pub mod dashboard_template_repository;
pub mod widget_catalog;

pub use study_repository::StudyRepository;
pub use menu_template_repository::MenuTemplateRepository;
pub use dashboard_template_repository::DashboardTemplateRepository;
pub use widget_catalog::WidgetCatalog;

#[cfg(test)]
pub use study_repository::MockStudyRepository;
#[cfg(test)]
pub use menu_template_repository::MockMenuTemplateRepository;
#[cfg(test)]
pub use dashboard_template_repository::MockDashboardTemplateRepository;
#[cfg(test)]
pub use widget_catalog::MockWidgetCatalog;
