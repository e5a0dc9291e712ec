//! # Sale Commands
//!
//! Checkout and transaction history.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/sale/checkout                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock cart ──► db.transactions().commit_checkout(cart items)            │
//! │                    │                                                    │
//! │                    ├── EmptyCart ───────► "Keranjang kosong!"           │
//! │                    ├── InsufficientStock ► cart kept, 409              │
//! │                    │                                                    │
//! │                    └── Transaction ─────► cart cleared                  │
//! │                                          "Transaksi berhasil!"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::Json;
use kasir_core::{report, Transaction, View};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::require_view;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub transaction: Transaction,
    pub message: String,
}

/// Sells the current cart.
pub async fn checkout(State(state): State<AppState>) -> ApiResult<Json<CheckoutResponse>> {
    let user = require_view(&state, View::Pos).await?;

    let mut cart = state.cart.lock().await;
    let transaction = match state.db.transactions().commit_checkout(&cart.items).await {
        Ok(transaction) => transaction,
        Err(e) => {
            warn!(user = %user.username, error = %e, "Checkout rejected");
            return Err(e.into());
        }
    };
    cart.clear();

    info!(
        user = %user.username,
        id = %transaction.id,
        total = %transaction.total,
        "Checkout complete"
    );

    Ok(Json(CheckoutResponse {
        transaction,
        message: "Transaksi berhasil!".to_string(),
    }))
}

/// Transaction history, newest first.
pub async fn list_transactions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Transaction>>> {
    require_view(&state, View::Transactions).await?;
    let transactions = state.db.transactions().get_transactions().await?;
    Ok(Json(report::newest_first(&transactions)))
}

/// One transaction for the detail modal.
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Transaction>> {
    require_view(&state, View::Transactions).await?;
    state
        .db
        .transactions()
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Transaction", &id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, update_cart_item, AddToCartRequest, UpdateQuantityRequest};
    use crate::commands::test_support::*;
    use crate::error::ErrorCode;

    async fn put(state: &AppState, id: &str, quantity: u32) {
        let _ = add_to_cart(
            State(state.clone()),
            Json(AddToCartRequest {
                product_id: id.to_string(),
            }),
        )
        .await
        .unwrap();
        if quantity > 1 {
            let _ = update_cart_item(
                State(state.clone()),
                Path(id.to_string()),
                Json(UpdateQuantityRequest { quantity }),
            )
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let state = kasir_state().await;
        put(&state, "prod_1", 2).await;
        put(&state, "prod_3", 1).await;

        let Json(res) = checkout(State(state.clone())).await.unwrap();
        assert_eq!(res.message, "Transaksi berhasil!");
        assert_eq!(res.transaction.total.rupiah(), 58_000);
        assert_eq!(res.transaction.profit.rupiah(), 26_000);

        assert!(state.cart.snapshot().await.is_empty());
        let kopi = state.db.products().get_by_id("prod_1").await.unwrap().unwrap();
        assert_eq!(kopi.stock, 48);

        let Json(detail) = get_transaction(State(state), Path(res.transaction.id.clone()))
            .await
            .unwrap();
        assert_eq!(detail, res.transaction);
    }

    #[tokio::test]
    async fn test_checkout_empty_cart() {
        let state = kasir_state().await;
        let err = checkout(State(state)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Keranjang kosong!");
    }

    #[tokio::test]
    async fn test_checkout_after_stock_dropped_keeps_cart() {
        let state = kasir_state().await;
        put(&state, "prod_4", 10).await;

        // Another sale takes most of the cake before this cart is paid.
        let cake = state.db.products().get_by_id("prod_4").await.unwrap().unwrap();
        let mut other = kasir_core::CartItem::from_product(&cake);
        other.quantity = 10;
        state.db.transactions().commit_checkout(&[other]).await.unwrap();

        let err = checkout(State(state.clone())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(state.cart.snapshot().await.total_quantity(), 10);

        let cake = state.db.products().get_by_id("prod_4").await.unwrap().unwrap();
        assert_eq!(cake.stock, 5);
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let state = kasir_state().await;
        put(&state, "prod_1", 1).await;
        let Json(first) = checkout(State(state.clone())).await.unwrap();
        put(&state, "prod_2", 1).await;
        let Json(second) = checkout(State(state.clone())).await.unwrap();

        let Json(history) = list_transactions(State(state)).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].date >= history[1].date);
        if history[0].date > history[1].date {
            assert_eq!(history[0].id, second.transaction.id);
            assert_eq!(history[1].id, first.transaction.id);
        }
    }

    #[tokio::test]
    async fn test_unknown_transaction() {
        let err = get_transaction(State(kasir_state().await), Path("trans_x".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
