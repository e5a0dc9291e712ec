//! # Auth Commands
//!
//! Login, logout and the restored session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kasir_core::access::{self, NavItem};
use kasir_core::{User, View};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    /// Landing view: dashboard for admin, pos for kasir.
    pub view: View,
    pub nav_items: Vec<NavItem>,
}

/// Logs in and moves to the role's landing view.
///
/// Wrong credentials are `INVALID_CREDENTIALS`.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    debug!(user = %req.username, "login command");

    let user = state
        .db
        .auth()
        .login(&req.username, &req.password)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    let view = access::landing_view(user.role);
    state.view.set(view).await;

    Ok(Json(LoginResponse {
        nav_items: access::nav_items(user.role),
        user,
        view,
    }))
}

/// Ends the session and empties the cart.
pub async fn logout(State(state): State<AppState>) -> ApiResult<StatusCode> {
    debug!("logout command");
    state.db.auth().logout().await?;
    state.cart.clear().await;
    state.view.set(View::default()).await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn current_user(State(state): State<AppState>) -> ApiResult<Json<Option<User>>> {
    Ok(Json(state.db.auth().get_current_user().await?))
}
