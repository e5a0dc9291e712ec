//! # Transaction Repository
//!
//! Sales history and checkout persistence.
//!
//! ## Checkout Persistence Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  commit_checkout(cart items)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────── write lock ──────────────────────────────────┐   │
//! │  │  1. kasir_core::checkout(items, current products)               │   │
//! │  │     └── InsufficientStock? → abort, nothing written             │   │
//! │  │  2. stamp id (trans_<uuid>) and date                            │   │
//! │  │  3. append transaction                                          │   │
//! │  │  4. write back stock of every product still in the table        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use kasir_core::{checkout, CartItem, Product, Transaction, TransactionDraft};
use tracing::{debug, info};

use crate::database::{new_id, MemoryDb, Operation, Shared};
use crate::error::StoreResult;

/// Repository for transaction operations.
#[derive(Clone)]
pub struct TransactionRepository {
    shared: Shared,
}

impl TransactionRepository {
    pub(crate) fn new(shared: Shared) -> Self {
        TransactionRepository { shared }
    }

    /// All transactions, oldest first.
    pub async fn get_transactions(&self) -> StoreResult<Vec<Transaction>> {
        self.shared.latency(Operation::GetTransactions).await;
        let tables = self.shared.tables.read().await;
        debug!(count = tables.transactions.len(), "Loaded transactions");
        Ok(tables.transactions.clone())
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Transaction>> {
        let tables = self.shared.tables.read().await;
        Ok(tables.transactions.iter().find(|t| t.id == id).cloned())
    }

    /// Persists a computed sale.
    ///
    /// Assigns the id and timestamp, appends the transaction and writes the
    /// stock of each product in `updated_products` that still exists. Both
    /// happen under one write lock.
    pub async fn save_transaction(
        &self,
        draft: TransactionDraft,
        updated_products: Vec<Product>,
    ) -> StoreResult<Transaction> {
        self.shared.latency(Operation::SaveTransaction).await;
        let mut tables = self.shared.tables.write().await;
        Ok(apply(&mut tables, draft, &updated_products))
    }

    /// Computes and persists a sale against the current stock in one step.
    ///
    /// ## Returns
    /// * `Ok(Transaction)` - sale recorded, stock decremented
    /// * `Err(Core(EmptyCart | InsufficientStock))` - nothing written
    pub async fn commit_checkout(&self, items: &[CartItem]) -> StoreResult<Transaction> {
        self.shared.latency(Operation::SaveTransaction).await;
        let mut tables = self.shared.tables.write().await;

        let plan = checkout(items, &tables.products)?;
        Ok(apply(&mut tables, plan.draft, &plan.updated_products))
    }
}

fn apply(tables: &mut MemoryDb, draft: TransactionDraft, updated_products: &[Product]) -> Transaction {
    let transaction = draft.into_transaction(new_id("trans"), Utc::now());

    for updated in updated_products {
        if let Some(product) = tables.products.iter_mut().find(|p| p.id == updated.id) {
            product.stock = updated.stock;
        }
    }
    tables.transactions.push(transaction.clone());

    info!(
        id = %transaction.id,
        total = %transaction.total,
        profit = %transaction.profit,
        items = transaction.items.len(),
        "Transaction saved"
    );
    transaction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::Database;
    use kasir_core::CoreError;

    async fn line(db: &Database, id: &str, qty: u32) -> CartItem {
        let product = db.products().get_by_id(id).await.unwrap().unwrap();
        let mut item = CartItem::from_product(&product);
        item.quantity = qty;
        item
    }

    #[tokio::test]
    async fn test_commit_checkout() {
        let db = Database::in_memory();
        let items = vec![line(&db, "prod_1", 2).await, line(&db, "prod_3", 1).await];

        let txn = db.transactions().commit_checkout(&items).await.unwrap();

        assert!(txn.id.starts_with("trans_"));
        assert_eq!(txn.total.rupiah(), 58_000);
        assert_eq!(txn.profit.rupiah(), 26_000);

        let kopi = db.products().get_by_id("prod_1").await.unwrap().unwrap();
        let croissant = db.products().get_by_id("prod_3").await.unwrap().unwrap();
        assert_eq!(kopi.stock, 48);
        assert_eq!(croissant.stock, 24);

        let history = db.transactions().get_transactions().await.unwrap();
        assert_eq!(history, vec![txn.clone()]);
        assert_eq!(db.transactions().get_by_id(&txn.id).await.unwrap(), Some(txn));
    }

    #[tokio::test]
    async fn test_commit_checkout_rejects_oversell() {
        let db = Database::in_memory();
        let items = vec![line(&db, "prod_4", 16).await];

        let err = db.transactions().commit_checkout(&items).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InsufficientStock { available: 15, requested: 16, .. })
        ));

        let cake = db.products().get_by_id("prod_4").await.unwrap().unwrap();
        assert_eq!(cake.stock, 15);
        assert!(db.transactions().get_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_checkout_empty() {
        let db = Database::in_memory();
        let err = db.transactions().commit_checkout(&[]).await.unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_save_transaction_skips_deleted_products() {
        let db = Database::in_memory();
        let products = db.products().get_products().await.unwrap();
        let items = vec![line(&db, "prod_2", 3).await];
        let plan = checkout(&items, &products).unwrap();

        db.products().delete_product("prod_6").await.unwrap();
        db.transactions()
            .save_transaction(plan.draft, plan.updated_products)
            .await
            .unwrap();

        let all = db.products().get_products().await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[1].stock, 27);
    }

    #[tokio::test]
    async fn test_history_survives_product_delete() {
        let db = Database::in_memory();
        let items = vec![line(&db, "prod_5", 1).await];
        db.transactions().commit_checkout(&items).await.unwrap();

        db.products().delete_product("prod_5").await.unwrap();
        let history = db.transactions().get_transactions().await.unwrap();
        assert_eq!(history[0].items[0].name, "Matcha Latte");
    }
}
