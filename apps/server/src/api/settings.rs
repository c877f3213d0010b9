use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use markethub_core::settings::{Settings, SettingsUpdate};

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let s = state.settings_service.get_settings().await?;
    Ok(Json(s))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SettingsUpdate>,
) -> ApiResult<Json<Settings>> {
    let updated = state.settings_service.update_settings(&payload).await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings))
}

/// PUT is split out so the admin gate only wraps the mutating route.
pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", put(update_settings))
}
