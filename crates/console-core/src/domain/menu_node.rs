// ============================================================================
// Console Core - Menu Node Entity
// File: crates/console-core/src/domain/menu_node.rs
// Description: Navigation tree entry
// ============================================================================

use std::collections::BTreeSet;

use console_shared::constants::STUDY_ID_PLACEHOLDER;
use serde::{Deserialize, Serialize};

use super::PermissionSet;

/// Kind of navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuNodeType {
    Group,
    #[default]
    Page,
    Dashboard,
    External,
}

/// Menu node. Trees are owned values; filtering and search always build
/// new trees instead of mutating shared ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Route template, may contain `{studyId}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(default, rename = "type")]
    pub node_type: MenuNodeType,

    #[serde(default)]
    pub children: Vec<MenuNode>,

    /// Empty means visible to everyone
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub permissions: BTreeSet<String>,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            route: None,
            node_type: MenuNodeType::default(),
            children: Vec::new(),
            permissions: BTreeSet::new(),
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_type(mut self, node_type: MenuNodeType) -> Self {
        self.node_type = node_type;
        self
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Copy of the node with an empty child list
    pub fn without_children(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            route: self.route.clone(),
            node_type: self.node_type,
            children: Vec::new(),
            permissions: self.permissions.clone(),
        }
    }

    pub fn is_dashboard(&self) -> bool {
        self.node_type == MenuNodeType::Dashboard
    }

    /// Own visibility only; children are judged separately
    pub fn is_visible_to(&self, granted: &PermissionSet) -> bool {
        self.permissions.is_empty() || granted.grants_any(&self.permissions)
    }

    /// Route with `{studyId}` replaced by the concrete study id
    pub fn concrete_route(&self, study_id: &str) -> Option<String> {
        self.route
            .as_deref()
            .map(|route| route.replace(STUDY_ID_PLACEHOLDER, study_id))
    }
}

/// Depth-first pre-order walk over a forest
pub fn walk_preorder(nodes: &[MenuNode]) -> Vec<&MenuNode> {
    fn visit<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a MenuNode>) {
        for node in nodes {
            out.push(node);
            visit(&node.children, out);
        }
    }

    let mut out = Vec::new();
    visit(nodes, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_route_substitutes_study_id() {
        let node = MenuNode::new("dm", "Data Mapping").with_route("/studies/{studyId}/data-mapping");
        assert_eq!(
            node.concrete_route("s-42").as_deref(),
            Some("/studies/s-42/data-mapping")
        );
        assert_eq!(MenuNode::new("g", "Group").concrete_route("s-42"), None);
    }

    #[test]
    fn test_walk_preorder_document_order() {
        let tree = vec![
            MenuNode::new("a", "A").with_children(vec![
                MenuNode::new("a1", "A1"),
                MenuNode::new("a2", "A2"),
            ]),
            MenuNode::new("b", "B"),
        ];
        let ids: Vec<&str> = walk_preorder(&tree).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let node: MenuNode = serde_json::from_str(r#"{"id":"x","label":"X"}"#).unwrap();
        assert_eq!(node.node_type, MenuNodeType::Page);
        assert!(node.children.is_empty());
        assert!(node.permissions.is_empty());

        let dash: MenuNode =
            serde_json::from_str(r#"{"id":"d","label":"D","type":"dashboard","permissions":["p1"]}"#).unwrap();
        assert!(dash.is_dashboard());
        assert!(dash.permissions.contains("p1"));
    }

    #[test]
    fn test_without_children_keeps_own_fields() {
        let node = MenuNode::new("reports", "Reports")
            .with_type(MenuNodeType::Group)
            .with_route("/studies/{studyId}/reports")
            .with_permissions(["reports.view"])
            .with_children(vec![MenuNode::new("safety", "Safety")]);

        let bare = node.without_children();
        assert!(bare.children.is_empty());
        assert_eq!(bare, MenuNode { children: Vec::new(), ..node });
    }
}
