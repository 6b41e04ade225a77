//! Breadcrumb trail for the current location

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use console_core::domain::Crumb;

use crate::extract::CallerPermissions;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BreadcrumbQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct BreadcrumbResponse {
    /// Empty when nothing beyond home would be shown
    pub items: Vec<Crumb>,
}

/// GET /api/v1/studies/{study_id}/breadcrumbs?path=...
pub async fn get_breadcrumbs(
    State(state): State<AppState>,
    Path(study_id): Path<String>,
    Query(query): Query<BreadcrumbQuery>,
    CallerPermissions(granted): CallerPermissions,
) -> Json<ApiResponse<BreadcrumbResponse>> {
    // A degraded menu is empty, which falls through to the segment trail
    let menu = state.menu_resolver.resolve_view(&study_id, &granted).await;
    let items = state
        .breadcrumbs
        .build_trail(&menu.items, &query.path, &study_id);

    Json(ApiResponse::success(BreadcrumbResponse { items }))
}
