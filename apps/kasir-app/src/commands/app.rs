//! # App Commands
//!
//! Startup load and health check.
//!
//! ## Bootstrap Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /api/bootstrap                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tokio::join!(products, transactions, users, settings, current user)   │
//! │       │                                                                 │
//! │       ├── any failed ──► error! logged, empty state returned           │
//! │       │                                                                 │
//! │       └── all ok ──────► full state; logged-in user lands on the       │
//! │                          role's landing view                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::Json;
use kasir_core::access::{self, NavItem};
use kasir_core::{AppSettings, Product, Transaction, User, View};
use serde::Serialize;
use tracing::{error, info};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapResponse {
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
    pub users: Vec<User>,
    pub settings: AppSettings,
    pub current_user: Option<User>,
    /// Landing view of the restored user.
    pub view: Option<View>,
    pub nav_items: Vec<NavItem>,
}

/// Loads everything the front end needs at startup.
///
/// Never fails: a load error is logged and an empty state is returned so the
/// login screen can still render.
pub async fn bootstrap(State(state): State<AppState>) -> Json<BootstrapResponse> {
    match load_all(&state).await {
        Ok(response) => {
            info!(
                products = response.products.len(),
                transactions = response.transactions.len(),
                logged_in = response.current_user.is_some(),
                "Bootstrap complete"
            );
            Json(response)
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize app");
            Json(BootstrapResponse::default())
        }
    }
}

async fn load_all(state: &AppState) -> ApiResult<BootstrapResponse> {
    let products = state.db.products();
    let transactions = state.db.transactions();
    let users = state.db.users();
    let settings = state.db.settings();
    let auth = state.db.auth();

    let (products, transactions, users, settings, current_user) = tokio::join!(
        products.get_products(),
        transactions.get_transactions(),
        users.get_users(),
        settings.get_app_settings(),
        auth.get_current_user(),
    );

    let current_user = current_user?;
    let view = current_user.as_ref().map(|u| access::landing_view(u.role));
    if let Some(view) = view {
        state.view.set(view).await;
    }

    Ok(BootstrapResponse {
        products: products?,
        transactions: transactions?,
        users: users?,
        settings: settings?,
        nav_items: current_user
            .as_ref()
            .map(|u| access::nav_items(u.role))
            .unwrap_or_default(),
        current_user,
        view,
    })
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
