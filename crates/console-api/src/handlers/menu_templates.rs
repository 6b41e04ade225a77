// ============================================================================
// Console API - Menu Template Handlers
// File: crates/console-api/src/handlers/menu_templates.rs
// ============================================================================
//! Admin CRUD for menu templates and study assignment

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use console_core::domain::{MenuNode, MenuTemplate, StudyRecord};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMenuTemplateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuNode>,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceItemsRequest {
    pub items: Vec<MenuNode>,
}

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct AssignTemplateRequest {
    pub menu_template_id: Option<String>,
}

/// GET /api/v1/menu-templates
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuTemplate>>>, ApiError> {
    let templates = state.menu_templates.list().await?;
    Ok(Json(ApiResponse::success(templates)))
}

/// POST /api/v1/menu-templates
pub async fn create_template(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuTemplateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MenuTemplate>>), ApiError> {
    let created = state
        .menu_templates
        .create(payload.name, payload.description, payload.items, payload.created_by)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// GET /api/v1/menu-templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MenuTemplate>>, ApiError> {
    let template = state.menu_templates.get(&id).await?;
    Ok(Json(ApiResponse::success(template)))
}

/// PUT /api/v1/menu-templates/{id}/items
pub async fn replace_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReplaceItemsRequest>,
) -> Result<Json<ApiResponse<MenuTemplate>>, ApiError> {
    let template = state.menu_templates.replace_items(&id, payload.items).await?;
    Ok(Json(ApiResponse::success(template)))
}

/// PUT /api/v1/menu-templates/{id}/active
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SetActiveRequest>,
) -> Result<Json<ApiResponse<MenuTemplate>>, ApiError> {
    let template = state.menu_templates.set_active(&id, payload.is_active).await?;
    Ok(Json(ApiResponse::success(template)))
}

/// DELETE /api/v1/menu-templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.menu_templates.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/studies/{study_id}/menu-template
pub async fn assign_to_study(
    State(state): State<AppState>,
    Path(study_id): Path<String>,
    Json(payload): Json<AssignTemplateRequest>,
) -> Result<Json<ApiResponse<StudyRecord>>, ApiError> {
    let study = state
        .menu_templates
        .assign_to_study(&study_id, payload.menu_template_id)
        .await?;
    Ok(Json(ApiResponse::success(study)))
}
