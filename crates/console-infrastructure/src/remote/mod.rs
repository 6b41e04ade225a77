//! Remote REST API adapters

pub mod client;
pub mod study_repo_impl;
pub mod menu_template_repo_impl;
pub mod dashboard_template_repo_impl;
pub mod widget_catalog_impl;

pub use client::RemoteApiClient;
pub use study_repo_impl::RemoteStudyRepository;
pub use menu_template_repo_impl::RemoteMenuTemplateRepository;
pub use dashboard_template_repo_impl::RemoteDashboardTemplateRepository;
pub use widget_catalog_impl::RemoteWidgetCatalog;
