//! Unified dashboard template composition

use axum::{
    extract::{Path, State},
    Json,
};

use console_core::domain::UnifiedTemplateView;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/unified-templates/{id}/compose
///
/// Orphaned or inconsistent dashboards answer 422 so the admin UI can block
/// activation.
pub async fn compose_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UnifiedTemplateView>>, ApiError> {
    let view = state.unified_templates.compose_by_id(&id).await?;
    Ok(Json(ApiResponse::success(view)))
}
