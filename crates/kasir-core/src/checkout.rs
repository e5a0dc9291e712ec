//! # Checkout Module
//!
//! Turns a cart into a transaction draft and the products' new stock levels.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Checkout                                        │
//! │                                                                         │
//! │  cart items ──┐                                                         │
//! │               ├──► checkout() ──► CheckoutPlan                          │
//! │  products ────┘        │            ├── draft (items, total, profit)    │
//! │                        │            └── updated_products (stock − qty)  │
//! │                        │                                                │
//! │                        ├── empty cart        → EmptyCart                │
//! │                        └── qty > stock       → InsufficientStock        │
//! │                                                                         │
//! │  The plan is handed to the store, which persists it atomically.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure function: neither the cart nor the product list is mutated.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartItem, Product, TransactionDraft};

/// Result of a successful checkout calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPlan {
    pub draft: TransactionDraft,

    /// Full product list with stock decremented for every sold line.
    pub updated_products: Vec<Product>,
}

impl CheckoutPlan {
    #[inline]
    pub fn total(&self) -> Money {
        self.draft.total
    }

    #[inline]
    pub fn profit(&self) -> Money {
        self.draft.profit
    }
}

/// Computes total, profit and new stock levels for a sale.
///
/// ## Rules
/// - total = Σ unit price × qty, using the cart's price snapshot
/// - profit = Σ (unit price − cost price) × qty; a line whose product no
///   longer exists contributes no profit
/// - every line whose product exists must have qty ≤ stock
///
/// ## Example
/// ```rust
/// use kasir_core::{checkout, CartItem, Money, Product};
///
/// let kopi = Product {
///     id: "prod_1".into(),
///     name: "Kopi Susu Gula Aren".into(),
///     sku: "KS-001".into(),
///     selling_price: Money::from_rupiah(18_000),
///     cost_price: Money::from_rupiah(10_000),
///     stock: 50,
///     image: None,
/// };
/// let mut line = CartItem::from_product(&kopi);
/// line.quantity = 2;
///
/// let plan = checkout(&[line], &[kopi]).unwrap();
/// assert_eq!(plan.total().rupiah(), 36_000);
/// assert_eq!(plan.profit().rupiah(), 16_000);
/// assert_eq!(plan.updated_products[0].stock, 48);
/// ```
pub fn checkout(items: &[CartItem], products: &[Product]) -> CoreResult<CheckoutPlan> {
    if items.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let by_id: HashMap<&str, &Product> = products.iter().map(|p| (p.id.as_str(), p)).collect();

    // Quantities per product, in case a caller hands over split lines.
    let mut sold: HashMap<&str, u32> = HashMap::new();
    let mut total = Money::zero();
    let mut profit = Money::zero();

    for item in items {
        total += item.line_total();

        if let Some(product) = by_id.get(item.product_id.as_str()) {
            profit += (item.selling_price - product.cost_price) * item.quantity;
            *sold.entry(product.id.as_str()).or_insert(0) += item.quantity;
        }
    }

    for (id, qty) in &sold {
        if let Some(product) = by_id.get(id) {
            if !product.can_sell(*qty) {
                return Err(CoreError::InsufficientStock {
                    sku: product.sku.clone(),
                    available: product.stock,
                    requested: *qty,
                });
            }
        }
    }

    let updated_products = products
        .iter()
        .map(|p| {
            let mut updated = p.clone();
            if let Some(qty) = sold.get(p.id.as_str()) {
                updated.stock -= qty;
            }
            updated
        })
        .collect();

    Ok(CheckoutPlan {
        draft: TransactionDraft {
            items: items.to_vec(),
            total,
            profit,
        },
        updated_products,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, sku: &str, sell: i64, cost: i64, stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: sku.to_string(),
            sku: sku.to_string(),
            selling_price: Money::from_rupiah(sell),
            cost_price: Money::from_rupiah(cost),
            stock,
            image: None,
        }
    }

    fn line(product: &Product, qty: u32) -> CartItem {
        let mut item = CartItem::from_product(product);
        item.quantity = qty;
        item
    }

    #[test]
    fn test_empty_cart() {
        let err = checkout(&[], &[]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_totals_profit_and_stock() {
        let kopi = product("prod_1", "KS-001", 18_000, 10_000, 50);
        let croissant = product("prod_3", "CR-001", 22_000, 12_000, 25);
        let donat = product("prod_6", "DN-001", 10_000, 4_000, 60);
        let products = vec![kopi.clone(), croissant.clone(), donat.clone()];

        let plan = checkout(&[line(&kopi, 2), line(&croissant, 1)], &products).unwrap();

        assert_eq!(plan.total().rupiah(), 58_000);
        assert_eq!(plan.profit().rupiah(), 26_000);
        assert_eq!(plan.updated_products[0].stock, 48);
        assert_eq!(plan.updated_products[1].stock, 24);
        assert_eq!(plan.updated_products[2].stock, 60);
        assert_eq!(plan.draft.items.len(), 2);
    }

    #[test]
    fn test_insufficient_stock() {
        let cake = product("prod_4", "RV-001", 35_000, 20_000, 1);
        let err = checkout(&[line(&cake, 2)], &[cake.clone()]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock { available: 1, requested: 2, .. }
        ));
    }

    #[test]
    fn test_sell_exact_stock_leaves_zero() {
        let cake = product("prod_4", "RV-001", 35_000, 20_000, 3);
        let plan = checkout(&[line(&cake, 3)], &[cake.clone()]).unwrap();
        assert_eq!(plan.updated_products[0].stock, 0);
    }

    #[test]
    fn test_missing_product_counts_revenue_only() {
        let gone = product("prod_x", "GONE", 5_000, 1_000, 10);
        let kopi = product("prod_1", "KS-001", 18_000, 10_000, 50);

        let plan = checkout(&[line(&gone, 2), line(&kopi, 1)], &[kopi.clone()]).unwrap();
        assert_eq!(plan.total().rupiah(), 28_000);
        assert_eq!(plan.profit().rupiah(), 8_000);
        assert_eq!(plan.updated_products.len(), 1);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let kopi = product("prod_1", "KS-001", 18_000, 10_000, 5);
        let products = vec![kopi.clone()];
        let _ = checkout(&[line(&kopi, 5)], &products).unwrap();
        assert_eq!(products[0].stock, 5);
    }
}
