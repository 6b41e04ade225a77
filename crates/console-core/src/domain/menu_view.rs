//! Menu resolution outcome handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::MenuNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MenuStatus {
    Ready,
    /// No template assigned, or the study/template is missing
    NotConfigured,
    /// Transient failure; the UI renders an empty menu with a retry control
    Unavailable { message: String, retryable: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMenu {
    pub study_id: String,
    pub items: Vec<MenuNode>,
    pub status: MenuStatus,
}

impl ResolvedMenu {
    pub fn ready(study_id: &str, items: Vec<MenuNode>) -> Self {
        Self {
            study_id: study_id.to_string(),
            items,
            status: MenuStatus::Ready,
        }
    }

    pub fn not_configured(study_id: &str) -> Self {
        Self {
            study_id: study_id.to_string(),
            items: Vec::new(),
            status: MenuStatus::NotConfigured,
        }
    }

    pub fn unavailable(study_id: &str, message: String, retryable: bool) -> Self {
        Self {
            study_id: study_id.to_string(),
            items: Vec::new(),
            status: MenuStatus::Unavailable { message, retryable },
        }
    }
}
