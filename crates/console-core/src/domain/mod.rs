//! # Console Core - Domain Module
//! 
//! Domain entities for menu and dashboard composition.

pub mod permission;
pub mod menu_node;
pub mod menu_template;
pub mod menu_view;
pub mod study;
pub mod dashboard_template;
pub mod widget;
pub mod data_requirement;
pub mod unified_template;
pub mod breadcrumb;

// Re-export all entities and enums
pub use permission::PermissionSet;
pub use menu_node::{walk_preorder, MenuNode, MenuNodeType};
pub use menu_template::{validate_items, MenuTemplate};
pub use menu_view::{MenuStatus, ResolvedMenu};
pub use study::StudyRecord;
pub use dashboard_template::{DashboardTemplate, WidgetOverrides, WidgetPlacement, WidgetPosition};
pub use widget::{FieldRequirement, WidgetDefinition};
pub use data_requirement::DataRequirement;
pub use unified_template::{UnifiedDashboardTemplate, UnifiedTemplateRecord, UnifiedTemplateView};
pub use breadcrumb::Crumb;
