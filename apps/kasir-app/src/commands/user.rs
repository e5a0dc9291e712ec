//! # User Commands
//!
//! Account management (admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kasir_core::validation::validate_user_input;
use kasir_core::{access, User, UserInput, View};
use tracing::info;

use crate::commands::require_view;
use crate::error::ApiResult;
use crate::state::AppState;

/// All users, without passwords.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    require_view(&state, View::Users).await?;
    Ok(Json(state.db.users().get_users().await?))
}

/// Adds or edits a user. An empty password on edit keeps the current one.
pub async fn save_user(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> ApiResult<Json<User>> {
    let admin = require_view(&state, View::Users).await?;
    validate_user_input(&input)?;

    let user = state.db.users().save_user(input).await?;
    info!(by = %admin.username, id = %user.id, role = %user.role, "User saved");
    Ok(Json(user))
}

/// Deletes a user. The logged-in account cannot delete itself.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let admin = require_view(&state, View::Users).await?;
    access::ensure_can_delete_user(&admin, &id)?;

    state.db.users().delete_user(&id).await?;
    info!(by = %admin.username, id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
