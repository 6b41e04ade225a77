// ============================================================================
// Console Core - Data Requirement
// File: crates/console-core/src/domain/data_requirement.rs
// Description: Aggregated data field consumed by one or more widgets
// ============================================================================

use serde::{Deserialize, Serialize};

use super::FieldRequirement;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirement {
    pub field_name: String,
    pub data_source: String,
    pub field_type: String,
    pub required: bool,
    /// Consuming widget instance ids, first-seen order, no duplicates
    pub widget_ids: Vec<String>,
}

impl DataRequirement {
    pub fn from_field(field: &FieldRequirement, widget_id: &str) -> Self {
        Self {
            field_name: field.field_name.clone(),
            data_source: field.data_source.clone(),
            field_type: field.field_type.clone(),
            required: field.required,
            widget_ids: vec![widget_id.to_string()],
        }
    }

    /// Dedup key
    pub fn key(&self) -> (&str, &str) {
        (&self.field_name, &self.data_source)
    }

    /// Fold another consumer of the same (field, source) pair into this record
    pub fn merge(&mut self, field: &FieldRequirement, widget_id: &str) {
        self.required |= field.required;
        if !self.widget_ids.iter().any(|id| id == widget_id) {
            self.widget_ids.push(widget_id.to_string());
        }
    }
}
