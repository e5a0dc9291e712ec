//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                        │
//! │  │  Cart    │     │          │     │ (sale.rs)│                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart            │                              │
//! │       │           update_cart_item       │                              │
//! │       │           remove_from_cart       │                              │
//! │       │                │                 │                              │
//! │       └── clear_cart ◄─┘◄────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every cart command returns the whole cart with its total so the front end
//! renders from one response.

use axum::extract::{Path, State};
use axum::Json;
use kasir_core::{Cart, CartItem, Money, View};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::require_view;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total: Money,
    /// Total formatted for display, e.g. `Rp 58.000`.
    pub total_display: String,
    pub item_count: usize,
    pub total_quantity: u32,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        CartResponse {
            items: cart.items.clone(),
            total,
            total_display: total.to_string(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

pub async fn get_cart(State(state): State<AppState>) -> ApiResult<Json<CartResponse>> {
    require_view(&state, View::Pos).await?;
    let cart = state.cart.snapshot().await;
    Ok(Json(CartResponse::from(&cart)))
}

/// Adds one unit of a product.
///
/// ## Rules
/// - stock 0 → "Stok produk habis!"
/// - already at stock → "Jumlah melebihi stok yang tersedia!"
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> ApiResult<Json<CartResponse>> {
    require_view(&state, View::Pos).await?;
    debug!(product_id = %req.product_id, "add_to_cart command");

    let product = state
        .db
        .products()
        .get_by_id(&req.product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &req.product_id))?;

    let mut cart = state.cart.lock().await;
    cart.add_product(&product)?;
    Ok(Json(CartResponse::from(&*cart)))
}

/// Sets a line's quantity; zero removes it.
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> ApiResult<Json<CartResponse>> {
    require_view(&state, View::Pos).await?;
    debug!(product_id = %product_id, quantity = req.quantity, "update_cart_item command");

    let mut cart = state.cart.lock().await;

    // A deleted product can still be dropped from the cart.
    if req.quantity == 0 {
        cart.remove_item(&product_id);
        return Ok(Json(CartResponse::from(&*cart)));
    }

    let product = state
        .db
        .products()
        .get_by_id(&product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &product_id))?;

    cart.update_quantity(&product, req.quantity)?;
    Ok(Json(CartResponse::from(&*cart)))
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Json<CartResponse>> {
    require_view(&state, View::Pos).await?;
    let mut cart = state.cart.lock().await;
    cart.remove_item(&product_id);
    Ok(Json(CartResponse::from(&*cart)))
}

pub async fn clear_cart(State(state): State<AppState>) -> ApiResult<Json<CartResponse>> {
    require_view(&state, View::Pos).await?;
    let mut cart = state.cart.lock().await;
    cart.clear();
    Ok(Json(CartResponse::from(&*cart)))
}
