//! Study record as returned by the study lookup collaborator

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Assigned menu template, referenced by id and never embedded
    #[serde(default)]
    pub menu_template_id: Option<String>,
}
