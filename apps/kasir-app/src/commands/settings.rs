//! # Settings Commands
//!
//! Branding is readable by anyone: the login screen shows the app name and
//! logo before a user exists. Saving is admin only.

use axum::extract::State;
use axum::Json;
use kasir_core::validation::validate_settings;
use kasir_core::{AppSettings, View};
use serde::Serialize;
use tracing::info;

use crate::commands::require_view;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsResponse {
    pub settings: AppSettings,
    pub message: String,
}

pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<AppSettings>> {
    Ok(Json(state.db.settings().get_app_settings().await?))
}

pub async fn save_settings(
    State(state): State<AppState>,
    Json(settings): Json<AppSettings>,
) -> ApiResult<Json<SaveSettingsResponse>> {
    let admin = require_view(&state, View::Settings).await?;
    validate_settings(&settings)?;

    let settings = AppSettings {
        app_name: settings.app_name.trim().to_string(),
        logo: settings.logo,
    };
    let saved = state.db.settings().save_app_settings(settings).await?;
    info!(by = %admin.username, app_name = %saved.app_name, "Settings saved");

    Ok(Json(SaveSettingsResponse {
        settings: saved,
        message: "Pengaturan berhasil disimpan!".to_string(),
    }))
}
