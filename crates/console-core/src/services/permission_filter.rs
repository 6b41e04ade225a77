// ============================================================================
// Console Core - Permission Filter
// File: crates/console-core/src/services/permission_filter.rs
// ============================================================================
//! Permission-based pruning of menu trees.
//!
//! A node with no required permissions is always kept. A gated node is kept
//! when the caller holds at least one of its permissions; otherwise it is
//! dropped together with its whole subtree. Kept nodes get their children
//! filtered recursively into a freshly built tree. A kept node whose children
//! all get filtered out still renders, as a leaf.

use crate::domain::{MenuNode, PermissionSet};

pub fn filter_menu(nodes: &[MenuNode], granted: &PermissionSet) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|node| node.is_visible_to(granted))
        .map(|node| {
            node.without_children()
                .with_children(filter_menu(&node.children, granted))
        })
        .collect()
}
