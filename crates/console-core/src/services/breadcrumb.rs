// ============================================================================
// Console Core - Breadcrumb Path Finder
// File: crates/console-core/src/services/breadcrumb.rs
// ============================================================================
//! Breadcrumb trails built from the menu tree, with a route-segment fallback

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use console_shared::utils::{is_valid_uuid, title_case};

use crate::domain::{Crumb, MenuNode};

/// Hex ids: any all-hex segment holding a digit, or 8+ hex characters.
/// Short letter-only words such as `add` or `feed` stay.
static ID_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9a-fA-F]*[0-9][0-9a-fA-F]*|[0-9a-fA-F]{8,})$").expect("valid id segment regex")
});

const MARKER_SEGMENTS: &[&str] = &["edit", "new"];

/// Depth-first pre-order search for the node whose concrete route equals
/// `target_route`. Returns the crumbs from the root down to the match, the
/// earliest match in document order winning.
pub fn find_path(nodes: &[MenuNode], target_route: &str, study_id: &str) -> Option<Vec<Crumb>> {
    fn search(
        nodes: &[MenuNode],
        target: &str,
        study_id: &str,
        trail: &mut Vec<Crumb>,
    ) -> bool {
        for node in nodes {
            let route = node.concrete_route(study_id);
            trail.push(Crumb::new(node.label.clone(), route.clone()));

            if route.as_deref() == Some(target) || search(&node.children, target, study_id, trail) {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    search(nodes, target_route, study_id, &mut trail).then_some(trail)
}

/// Trail derived from the route itself: id-like segments and edit/new
/// markers are skipped, the rest title-cased and linked to their
/// accumulated prefix. The last crumb carries no href.
pub fn fallback_trail(route: &str) -> Vec<Crumb> {
    let mut prefix = String::new();
    let mut crumbs = Vec::new();

    for segment in route.split('/').filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);

        if is_skipped_segment(segment) {
            continue;
        }
        crumbs.push(Crumb::linked(title_case(segment), prefix.clone()));
    }

    if let Some(last) = crumbs.last_mut() {
        last.href = None;
    }
    crumbs
}

fn is_skipped_segment(segment: &str) -> bool {
    ID_SEGMENT.is_match(segment)
        || is_valid_uuid(segment)
        || MARKER_SEGMENTS.contains(&segment.to_ascii_lowercase().as_str())
}

/// Strips query string, fragment and trailing slash
pub fn normalize_route(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    let path = &route[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Builds complete trails for the presentation layer
#[derive(Debug, Clone)]
pub struct BreadcrumbBuilder {
    home: Crumb,
}

impl BreadcrumbBuilder {
    pub fn new(home_label: impl Into<String>, home_href: impl Into<String>) -> Self {
        Self {
            home: Crumb::linked(home_label, home_href),
        }
    }

    /// Home crumb followed by the tree path (or the fallback trail).
    /// Empty when nothing but home would be shown.
    pub fn build_trail(&self, nodes: &[MenuNode], route: &str, study_id: &str) -> Vec<Crumb> {
        let route = normalize_route(route);

        let path = match find_path(nodes, route, study_id) {
            Some(mut path) => {
                if let Some(last) = path.last_mut() {
                    last.href = None;
                }
                path
            }
            None => {
                debug!("No menu entry for route {}, deriving trail from segments", route);
                fallback_trail(route)
            }
        };

        if path.is_empty() {
            return Vec::new();
        }

        let mut trail = Vec::with_capacity(path.len() + 1);
        trail.push(self.home.clone());
        trail.extend(path);
        trail
    }
}
