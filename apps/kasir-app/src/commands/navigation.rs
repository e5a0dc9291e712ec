//! # Navigation Commands
//!
//! Sidebar clicks go through the role gate.
//!
//! ```text
//! kasir clicks "Pengaturan"
//!      │
//!      ▼
//! navigate(settings) ──► can_access(kasir, settings)? no
//!      │
//!      ▼
//! { outcome: "ACCESS_DENIED", view: "settings", fallback: "pos" }
//! (current view unchanged; the screen shows "Akses Ditolak")
//! ```

use axum::extract::State;
use axum::Json;
use kasir_core::access::{self, NavItem};
use kasir_core::View;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::commands::require_user;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub view: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationOutcome {
    Granted,
    AccessDenied,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub outcome: NavigationOutcome,
    /// The requested view.
    pub view: View,
    /// Where the "back" button of the access-denied screen leads.
    pub fallback: View,
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(req): Json<NavigateRequest>,
) -> ApiResult<Json<NavigateResponse>> {
    let user = require_user(&state).await?;
    let fallback = access::landing_view(user.role);

    let outcome = if access::can_access(user.role, req.view) {
        state.view.set(req.view).await;
        debug!(user = %user.username, view = %req.view, "Navigated");
        NavigationOutcome::Granted
    } else {
        warn!(user = %user.username, view = %req.view, "Navigation denied");
        NavigationOutcome::AccessDenied
    };

    Ok(Json(NavigateResponse {
        outcome,
        view: req.view,
        fallback,
    }))
}

/// Sidebar entries for the logged-in user.
pub async fn nav_items(State(state): State<AppState>) -> ApiResult<Json<Vec<NavItem>>> {
    let user = require_user(&state).await?;
    Ok(Json(access::nav_items(user.role)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;
    use crate::error::ErrorCode;

    fn to(view: View) -> Json<NavigateRequest> {
        Json(NavigateRequest { view })
    }

    #[tokio::test]
    async fn test_kasir_denied_admin_screen() {
        let state = kasir_state().await;
        state.view.set(View::Pos).await;

        let Json(res) = navigate(State(state.clone()), to(View::Users)).await.unwrap();
        assert_eq!(res.outcome, NavigationOutcome::AccessDenied);
        assert_eq!(res.fallback, View::Pos);
        assert_eq!(state.view.get().await, View::Pos);
    }

    #[tokio::test]
    async fn test_kasir_granted_transactions() {
        let state = kasir_state().await;
        let Json(res) = navigate(State(state.clone()), to(View::Transactions))
            .await
            .unwrap();
        assert_eq!(res.outcome, NavigationOutcome::Granted);
        assert_eq!(state.view.get().await, View::Transactions);
    }

    #[tokio::test]
    async fn test_admin_granted_everywhere() {
        let state = admin_state().await;
        for view in View::ALL {
            let Json(res) = navigate(State(state.clone()), to(view)).await.unwrap();
            assert_eq!(res.outcome, NavigationOutcome::Granted);
        }
    }

    #[tokio::test]
    async fn test_anonymous_navigation() {
        let err = navigate(State(state()), to(View::Pos)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn test_nav_items() {
        let Json(items) = nav_items(State(kasir_state().await)).await.unwrap();
        let views: Vec<View> = items.iter().map(|i| i.view).collect();
        assert_eq!(views, vec![View::Pos, View::Transactions]);
    }
}
