// ============================================================================
// Console API - Study Menu Handlers
// File: crates/console-api/src/handlers/menu.rs
// ============================================================================
//! Study navigation menu (resolve, refetch)

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use console_core::domain::ResolvedMenu;

use crate::extract::CallerPermissions;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/studies/{study_id}/menu
///
/// Always 200: failures come back as an empty menu with a status the UI uses
/// to show "no menu configured" or a retry control.
pub async fn get_menu(
    State(state): State<AppState>,
    Path(study_id): Path<String>,
    CallerPermissions(granted): CallerPermissions,
) -> Json<ApiResponse<ResolvedMenu>> {
    let menu = state.menu_resolver.resolve_view(&study_id, &granted).await;
    Json(ApiResponse::success(menu))
}

/// POST /api/v1/studies/{study_id}/menu/refetch
pub async fn refetch_menu(
    State(state): State<AppState>,
    Path(study_id): Path<String>,
    CallerPermissions(granted): CallerPermissions,
) -> Json<ApiResponse<ResolvedMenu>> {
    info!("Menu refetch requested for study {}", study_id);
    let menu = state.menu_resolver.refetch_view(&study_id, &granted).await;
    Json(ApiResponse::success(menu))
}
