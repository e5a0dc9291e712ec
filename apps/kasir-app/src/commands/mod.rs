//! # Commands
//!
//! One module per screen. Every handler is a plain async function taking
//! axum extractors, so tests call them directly without a server.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Module        Route prefix        Roles                                │
//! │  ──────        ────────────        ─────                                │
//! │  app           /api/bootstrap      anyone                               │
//! │  auth          /api/auth           anyone                               │
//! │  navigation    /api/navigation     logged in                            │
//! │  product       /api/products       read: pos roles, write: admin        │
//! │  cart          /api/cart           pos roles                            │
//! │  sale          /api/sale, /api/transactions   pos roles                 │
//! │  user          /api/users          admin                                │
//! │  settings      /api/settings       read: anyone, write: admin           │
//! │  dashboard     /api/dashboard      admin                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod navigation;
pub mod product;
pub mod sale;
pub mod settings;
pub mod user;

use kasir_core::{access, User, View};
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// The logged-in user, or `UNAUTHORIZED`.
pub(crate) async fn require_user(state: &AppState) -> ApiResult<User> {
    state
        .db
        .auth()
        .get_current_user()
        .await?
        .ok_or_else(ApiError::unauthorized)
}

/// The logged-in user if their role may open `view`, else `ACCESS_DENIED`.
pub(crate) async fn require_view(state: &AppState, view: View) -> ApiResult<User> {
    let user = require_user(state).await?;
    if !access::can_access(user.role, view) {
        warn!(user = %user.username, role = %user.role, view = %view, "Access denied");
        return Err(ApiError::access_denied());
    }
    Ok(user)
}

#[cfg(test)]
pub(crate) mod test_support {
    use kasir_core::User;
    use kasir_store::Database;

    use crate::config::AppConfig;
    use crate::state::AppState;

    pub fn state() -> AppState {
        AppState::with_database(Database::in_memory(), AppConfig::default())
    }

    pub async fn login_as(state: &AppState, username: &str, password: &str) -> User {
        state
            .db
            .auth()
            .login(username, password)
            .await
            .unwrap()
            .unwrap()
    }

    pub async fn admin_state() -> AppState {
        let state = state();
        login_as(&state, "admin", "admin123").await;
        state
    }

    pub async fn kasir_state() -> AppState {
        let state = state();
        login_as(&state, "kasir", "kasir123").await;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_require_user_without_session() {
        let err = require_user(&state()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn test_require_view_by_role() {
        let kasir = kasir_state().await;
        assert!(require_view(&kasir, View::Pos).await.is_ok());
        let err = require_view(&kasir, View::Settings).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AccessDenied);

        let admin = admin_state().await;
        assert!(require_view(&admin, View::Settings).await.is_ok());
    }
}
