//! Unified dashboard template: one menu template plus its bound dashboards

use serde::{Deserialize, Serialize};

use super::{DashboardTemplate, DataRequirement, MenuTemplate};

/// Stored record pointing at the menu template a unified template is built on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedTemplateRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub menu_template_id: String,
}

/// Result of composing a menu template with its dashboard templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedDashboardTemplate {
    pub menu_template: MenuTemplate,
    pub dashboards: Vec<DashboardTemplate>,
    pub data_requirements: Vec<DataRequirement>,
    /// Dashboard-type menu nodes that have no dashboard template yet
    pub unbound_dashboard_nodes: Vec<String>,
}

/// Composed template together with its stored identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedTemplateView {
    #[serde(flatten)]
    pub record: UnifiedTemplateRecord,
    #[serde(flatten)]
    pub template: UnifiedDashboardTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuTemplate;
    use serde_json::json;

    #[test]
    fn test_view_serializes_camel_case() {
        let view = UnifiedTemplateView {
            record: UnifiedTemplateRecord {
                id: "u1".into(),
                name: "Oncology bundle".into(),
                description: None,
                menu_template_id: "t1".into(),
            },
            template: UnifiedDashboardTemplate {
                menu_template: MenuTemplate::new("Oncology".into(), None, vec![], None).unwrap(),
                dashboards: vec![],
                data_requirements: vec![],
                unbound_dashboard_nodes: vec!["safety".into()],
            },
        };

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["menuTemplateId"], "t1");
        assert_eq!(value["unboundDashboardNodes"], json!(["safety"]));
        assert_eq!(value["dataRequirements"], json!([]));
        assert!(value.get("menuTemplate").is_some());
        assert!(value.get("data_requirements").is_none());
    }
}
