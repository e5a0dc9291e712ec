//! # Cart Module
//!
//! The cashier's in-progress sale.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Cashier Action           Cart Method             Stock Rule            │
//! │  ──────────────           ───────────             ──────────            │
//! │                                                                         │
//! │  Click product ─────────► add_product() ────────► stock 0 → reject     │
//! │                                                   qty == stock → reject │
//! │                                                                         │
//! │  Type quantity ─────────► update_quantity() ────► qty > stock → reject  │
//! │                                                   qty 0 → remove line   │
//! │                                                                         │
//! │  Click remove ──────────► remove_item()                                 │
//! │                                                                         │
//! │  After checkout ────────► clear()                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are unique by product id. Name and price are snapshots taken when a
//! line is created.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartItem, Product};

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product
/// - Every line has quantity ≥ 1
/// - No line quantity exceeds the product stock seen when it was set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product with no stock: `OutOfStock`
    /// - Already in cart at full stock: `QuantityExceedsStock`
    /// - Already in cart: quantity + 1
    /// - Not in cart: new line with quantity 1
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        if product.stock == 0 {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
            });
        }

        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => {
                if item.quantity >= product.stock {
                    return Err(CoreError::QuantityExceedsStock {
                        name: product.name.clone(),
                        available: product.stock,
                        requested: item.quantity + 1,
                    });
                }
                item.quantity += 1;
            }
            None => self.items.push(CartItem::from_product(product)),
        }

        Ok(())
    }

    /// Sets the quantity of the line for `product`.
    ///
    /// Zero removes the line. A quantity above stock is rejected and the cart
    /// is left unchanged.
    pub fn update_quantity(&mut self, product: &Product, quantity: u32) -> CoreResult<()> {
        if quantity > product.stock {
            return Err(CoreError::QuantityExceedsStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        if quantity == 0 {
            self.remove_item(&product.id);
            return Ok(());
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
            .ok_or_else(|| CoreError::NotInCart(product.id.clone()))?;
        item.quantity = quantity;

        Ok(())
    }

    /// Removes the line for `product_id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Σ sellingPrice × quantity.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
