// ============================================================================
// Console Core - Menu Template Entity
// File: crates/console-core/src/domain/menu_template.rs
// Description: Reusable navigation tree assignable to many studies
// ============================================================================

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use console_shared::types::new_id;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::menu_node::{walk_preorder, MenuNode};
use crate::error::DomainError;

/// Menu Template entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuTemplate {
    pub id: String,

    #[validate(length(min = 2, max = 100, message = "Template name must be between 2 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub items: Vec<MenuNode>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Denormalized number of studies referencing this template
    #[serde(default)]
    pub studies_count: u32,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<String>,
}

fn default_active() -> bool {
    true
}

impl MenuTemplate {
    pub fn new(
        name: String,
        description: Option<String>,
        items: Vec<MenuNode>,
        created_by: Option<String>,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let template = Self {
            id: new_id(),
            name: name.trim().to_string(),
            description: description.map(|d| d.trim().to_string()),
            items,
            is_active: true,
            studies_count: 0,
            created_at: now,
            updated_at: now,
            created_by,
        };

        template.validate()?;
        validate_items(&template.items)?;
        Ok(template)
    }

    /// Full replacement of the item tree; there is no partial patch
    pub fn replace_items(&mut self, items: Vec<MenuNode>) -> Result<(), DomainError> {
        validate_items(&items)?;
        self.items = items;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Utc::now();
    }

    pub fn can_delete(&self) -> bool {
        self.studies_count == 0
    }

    /// Dashboard-type node with the given id, anywhere in the tree
    pub fn dashboard_node(&self, node_id: &str) -> Option<&MenuNode> {
        walk_preorder(&self.items)
            .into_iter()
            .find(|n| n.is_dashboard() && n.id == node_id)
    }

    pub fn dashboard_nodes(&self) -> Vec<&MenuNode> {
        walk_preorder(&self.items)
            .into_iter()
            .filter(|n| n.is_dashboard())
            .collect()
    }
}

/// Node ids must be non-empty and unique across the whole tree, labels non-empty
pub fn validate_items(items: &[MenuNode]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for node in walk_preorder(items) {
        if node.id.trim().is_empty() {
            return Err(DomainError::ValidationError("Menu node id must not be empty".into()));
        }
        if node.label.trim().is_empty() {
            return Err(DomainError::ValidationError(format!(
                "Menu node {} has an empty label",
                node.id
            )));
        }
        if !seen.insert(node.id.as_str()) {
            return Err(DomainError::ValidationError(format!(
                "Duplicate menu node id: {}",
                node.id
            )));
        }
    }
    Ok(())
}
