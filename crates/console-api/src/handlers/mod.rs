//! HTTP handlers

pub mod health;
pub mod menu;
pub mod breadcrumb;
pub mod menu_templates;
pub mod unified_templates;
