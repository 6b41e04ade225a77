//! Breadcrumb entries

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Crumb {
    pub fn new(label: impl Into<String>, href: Option<String>) -> Self {
        Self {
            label: label.into(),
            href,
        }
    }

    pub fn linked(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(label, Some(href.into()))
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self::new(label, None)
    }
}
