use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use console_core::services::CacheStats;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    menu_cache: CacheStats,
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            menu_cache: state.menu_cache.stats(),
        }),
    )
}
