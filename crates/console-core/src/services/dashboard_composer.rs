// ============================================================================
// Console Core - Dashboard Template Composer
// File: crates/console-core/src/services/dashboard_composer.rs
// ============================================================================
//! Binds dashboard templates to the dashboard nodes of a menu template and
//! aggregates the data fields their widgets need.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::{
    DashboardTemplate, DataRequirement, MenuTemplate, UnifiedDashboardTemplate, WidgetDefinition,
};
use crate::error::DomainError;
use crate::repositories::WidgetCatalog;

pub struct DashboardComposer {
    catalog: Arc<dyn WidgetCatalog>,
}

impl DashboardComposer {
    pub fn new(catalog: Arc<dyn WidgetCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn compose(
        &self,
        menu_template: MenuTemplate,
        dashboards: Vec<DashboardTemplate>,
    ) -> Result<UnifiedDashboardTemplate, DomainError> {
        let unbound_dashboard_nodes = validate_bindings(&menu_template, &dashboards)?;
        let definitions = self.load_definitions(&dashboards).await?;
        let data_requirements = aggregate_requirements(&dashboards, &definitions);

        info!(
            "Composed template {} with {} dashboards and {} data requirements",
            menu_template.id,
            dashboards.len(),
            data_requirements.len()
        );

        Ok(UnifiedDashboardTemplate {
            menu_template,
            dashboards,
            data_requirements,
            unbound_dashboard_nodes,
        })
    }

    /// One catalog lookup per distinct widget id
    async fn load_definitions(
        &self,
        dashboards: &[DashboardTemplate],
    ) -> Result<HashMap<String, WidgetDefinition>, DomainError> {
        let widget_ids: IndexSet<&str> = dashboards
            .iter()
            .flat_map(|d| d.widgets.iter().map(|w| w.widget_id.as_str()))
            .collect();

        debug!("Loading {} widget definitions", widget_ids.len());

        let definitions = try_join_all(widget_ids.iter().map(|&widget_id| async move {
            self.catalog
                .find_definition(widget_id)
                .await?
                .map(|definition| (widget_id.to_string(), definition))
                .ok_or_else(|| DomainError::WidgetNotFound(widget_id.to_string()))
        }))
        .await?;

        Ok(definitions.into_iter().collect())
    }
}

/// Checks every dashboard against the menu tree.
///
/// Fails on an empty dashboard list, on dashboards pointing at a missing or
/// non-dashboard node, on two dashboards bound to the same node, and on
/// invalid widget geometry. Orphans are reported ahead of any other problem
/// with the same dashboard. Returns the dashboard node ids left without a
/// dashboard.
pub fn validate_bindings(
    menu_template: &MenuTemplate,
    dashboards: &[DashboardTemplate],
) -> Result<Vec<String>, DomainError> {
    if dashboards.is_empty() {
        return Err(DomainError::ValidationError(format!(
            "Unified template for menu template {} has no dashboards",
            menu_template.id
        )));
    }

    let mut bound: HashMap<&str, &str> = HashMap::new();

    for dashboard in dashboards {
        if menu_template.dashboard_node(&dashboard.menu_item_id).is_none() {
            return Err(DomainError::OrphanDashboard {
                dashboard_id: dashboard.id.clone(),
                menu_item_id: dashboard.menu_item_id.clone(),
            });
        }

        dashboard.validate().map_err(|e| {
            DomainError::ValidationError(format!("Dashboard {}: {}", dashboard.id, e))
        })?;

        if let Some(other) = bound.insert(&dashboard.menu_item_id, &dashboard.id) {
            return Err(DomainError::ValidationError(format!(
                "Dashboards {} and {} are both bound to menu node {}",
                other, dashboard.id, dashboard.menu_item_id
            )));
        }
    }

    Ok(menu_template
        .dashboard_nodes()
        .into_iter()
        .filter(|node| !bound.contains_key(node.id.as_str()))
        .map(|node| node.id.clone())
        .collect())
}

/// Deduplicates required fields by (field name, data source) in
/// first-encountered order, unioning consumers and OR-ing `required`.
pub fn aggregate_requirements(
    dashboards: &[DashboardTemplate],
    definitions: &HashMap<String, WidgetDefinition>,
) -> Vec<DataRequirement> {
    let mut aggregated: IndexMap<(String, String), DataRequirement> = IndexMap::new();

    let placements = dashboards.iter().flat_map(|d| d.widgets.iter());
    for placement in placements {
        let Some(definition) = definitions.get(&placement.widget_id) else {
            continue;
        };

        for field in &definition.required_fields {
            let key = (field.field_name.clone(), field.data_source.clone());
            match aggregated.get_mut(&key) {
                Some(existing) => {
                    if existing.field_type != field.field_type {
                        warn!(
                            "Field {}.{} declared as {} by widget {} but {} earlier; keeping {}",
                            field.data_source,
                            field.field_name,
                            field.field_type,
                            placement.widget_id,
                            existing.field_type,
                            existing.field_type
                        );
                    }
                    existing.merge(field, &placement.widget_id);
                }
                None => {
                    aggregated.insert(key, DataRequirement::from_field(field, &placement.widget_id));
                }
            }
        }
    }

    aggregated.into_values().collect()
}
