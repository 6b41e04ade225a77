//! Widget catalog definitions

use serde::{Deserialize, Serialize};

/// One data field a widget needs in order to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRequirement {
    pub field_name: String,
    pub data_source: String,
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefinition {
    pub widget_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub required_fields: Vec<FieldRequirement>,
}
