// ============================================================================
// Console Core - Permission Set
// File: crates/console-core/src/domain/permission.rs
// Description: Capabilities granted to the current caller
// ============================================================================

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Flat set of permission strings held by a caller.
///
/// Anonymous sessions use [`PermissionSet::empty`] and only see menu
/// nodes that carry no permission requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when at least one of `required` is granted
    pub fn grants_any(&self, required: &BTreeSet<String>) -> bool {
        required.iter().any(|p| self.0.contains(p))
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
