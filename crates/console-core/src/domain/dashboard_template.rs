// ============================================================================
// Console Core - Dashboard Template Entity
// File: crates/console-core/src/domain/dashboard_template.rs
// Description: Positioned widget placements bound to one dashboard menu node
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Grid position of a widget placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WidgetPosition {
    pub x: u32,
    pub y: u32,
    #[validate(range(min = 1, message = "Widget width must be greater than zero"))]
    pub width: u32,
    #[validate(range(min = 1, message = "Widget height must be greater than zero"))]
    pub height: u32,
}

/// Per-placement fields layered atop the widget's base definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPlacement {
    /// Widget instance id, also the key for the widget catalog
    pub widget_id: String,
    #[validate(nested)]
    pub position: WidgetPosition,
    #[serde(default)]
    pub overrides: WidgetOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTemplate {
    pub id: String,
    pub name: String,
    /// Dashboard-type menu node this dashboard is attached to
    pub menu_item_id: String,
    #[serde(default)]
    #[validate(nested)]
    pub widgets: Vec<WidgetPlacement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(width: u32, height: u32) -> WidgetPlacement {
        WidgetPlacement {
            widget_id: "w1".into(),
            position: WidgetPosition { x: 0, y: 0, width, height },
            overrides: WidgetOverrides::default(),
        }
    }

    #[test]
    fn test_zero_sized_placement_is_invalid() {
        assert!(placement(4, 2).validate().is_ok());
        assert!(placement(0, 2).validate().is_err());
        assert!(placement(4, 0).validate().is_err());
    }

    #[test]
    fn test_dashboard_validates_nested_placements() {
        let dashboard = DashboardTemplate {
            id: "d1".into(),
            name: "Safety".into(),
            menu_item_id: "safety".into(),
            widgets: vec![placement(4, 2), placement(0, 1)],
        };
        assert!(dashboard.validate().is_err());
    }

    #[test]
    fn test_overrides_keep_unknown_fields() {
        let json = r#"{
            "widgetId": "w1",
            "position": {"x": 1, "y": 2, "width": 3, "height": 4},
            "overrides": {"title": "Enrollment", "color": "teal"}
        }"#;
        let placement: WidgetPlacement = serde_json::from_str(json).unwrap();
        assert_eq!(placement.overrides.title.as_deref(), Some("Enrollment"));
        assert_eq!(placement.overrides.extra["color"], "teal");
    }
}
