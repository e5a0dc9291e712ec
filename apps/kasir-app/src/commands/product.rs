//! # Product Commands
//!
//! Product listing for the POS grid and CRUD for the inventory screen.
//!
//! ## Product Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inventory → "Tambah Produk" / "Edit"                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /api/products { id?, name, sku, sellingPrice, costPrice, ... }   │
//! │       │                                                                 │
//! │       ├── not admin ─────────► ACCESS_DENIED                            │
//! │       ├── invalid field ─────► VALIDATION_ERROR                         │
//! │       ├── unknown id ────────► NOT_FOUND                                │
//! │       └── saved ─────────────► Product                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kasir_core::validation::{validate_product_input, validate_search_query};
use kasir_core::{Product, ProductInput, View};
use serde::Deserialize;
use tracing::{debug, info};

use crate::commands::require_view;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// All products (POS grid and inventory table).
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    require_view(&state, View::Pos).await?;
    Ok(Json(state.db.products().get_products().await?))
}

/// Name search for the POS screen.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Product>>> {
    require_view(&state, View::Pos).await?;
    let query = validate_search_query(&params.q)?;
    debug!(query = %query, "search_products command");
    Ok(Json(state.db.products().search(&query).await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    require_view(&state, View::Pos).await?;
    state
        .db
        .products()
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product", &id))
}

/// Adds or edits a product (admin).
pub async fn save_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> ApiResult<Json<Product>> {
    let user = require_view(&state, View::Inventory).await?;
    validate_product_input(&input)?;

    let product = state.db.products().save_product(input).await?;
    info!(by = %user.username, id = %product.id, "Product saved");
    Ok(Json(product))
}

/// Deletes a product (admin). Past transactions keep their snapshots.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user = require_view(&state, View::Inventory).await?;
    state.db.products().delete_product(&id).await?;
    info!(by = %user.username, id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;
    use crate::error::ErrorCode;
    use kasir_core::Money;

    fn form(id: Option<&str>, name: &str, sku: &str) -> ProductInput {
        ProductInput {
            id: id.map(str::to_string),
            name: name.to_string(),
            sku: sku.to_string(),
            selling_price: Money::from_rupiah(12_000),
            cost_price: Money::from_rupiah(5_000),
            stock: 8,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_kasir_can_list_but_not_write() {
        let state = kasir_state().await;
        let Json(products) = list_products(State(state.clone())).await.unwrap();
        assert_eq!(products.len(), 6);

        let err = save_product(State(state.clone()), Json(form(None, "Teh", "TH-001")))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AccessDenied);

        let err = delete_product(State(state), Path("prod_1".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AccessDenied);
    }

    #[tokio::test]
    async fn test_admin_add_and_edit() {
        let state = admin_state().await;

        let Json(added) = save_product(State(state.clone()), Json(form(None, "Teh Tarik", "TT-001")))
            .await
            .unwrap();
        assert!(added.id.starts_with("prod_"));

        let Json(edited) = save_product(
            State(state.clone()),
            Json(form(Some(&added.id), "Teh Tarik Dingin", "TT-001")),
        )
        .await
        .unwrap();
        assert_eq!(edited.id, added.id);
        assert_eq!(edited.name, "Teh Tarik Dingin");

        let Json(fetched) = get_product(State(state), Path(added.id)).await.unwrap();
        assert_eq!(fetched, edited);
    }

    #[tokio::test]
    async fn test_missing_required_fields_rejected() {
        let state = admin_state().await;
        let err = save_product(State(state.clone()), Json(form(None, "", "TT-001")))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = save_product(State(state.clone()), Json(form(None, "Teh", "")))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let Json(products) = list_products(State(state)).await.unwrap();
        assert_eq!(products.len(), 6);
    }

    #[tokio::test]
    async fn test_search_and_delete() {
        let state = admin_state().await;
        let Json(found) = search_products(
            State(state.clone()),
            Query(SearchParams { q: "kopi".to_string() }),
        )
        .await
        .unwrap();
        assert_eq!(found.len(), 1);

        delete_product(State(state.clone()), Path("prod_1".to_string()))
            .await
            .unwrap();
        let err = get_product(State(state), Path("prod_1".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
