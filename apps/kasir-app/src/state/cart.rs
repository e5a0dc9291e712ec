//! # Cart State
//!
//! The cashier's cart, shared across handlers.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end action          Handler                 Cart change          │
//! │  ────────────────          ───────                 ───────────          │
//! │  Click product ──────────► cart::add ─────────────► +1 or new line      │
//! │  Change quantity ────────► cart::update ──────────► qty = n / remove    │
//! │  Click remove ───────────► cart::remove ──────────► line removed        │
//! │  Checkout / logout ──────► clear() ───────────────► empty               │
//! │                                                                         │
//! │  All writes hold the mutex for the whole read-modify-write.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use kasir_core::Cart;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct CartState {
    inner: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        CartState::default()
    }

    /// Exclusive access for a read-modify-write.
    pub async fn lock(&self) -> MutexGuard<'_, Cart> {
        self.inner.lock().await
    }

    /// Copy of the current cart.
    pub async fn snapshot(&self) -> Cart {
        self.inner.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::{Money, Product};

    #[tokio::test]
    async fn test_shared_between_clones() {
        let state = CartState::new();
        let other = state.clone();

        let product = Product {
            id: "prod_1".to_string(),
            name: "Kopi".to_string(),
            sku: "KS-001".to_string(),
            selling_price: Money::from_rupiah(18_000),
            cost_price: Money::from_rupiah(10_000),
            stock: 5,
            image: None,
        };
        state.lock().await.add_product(&product).unwrap();

        assert_eq!(other.snapshot().await.total_quantity(), 1);
        other.clear().await;
        assert!(state.snapshot().await.is_empty());
    }
}
