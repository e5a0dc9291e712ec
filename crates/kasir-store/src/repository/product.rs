//! # Product Repository
//!
//! ## Key Operations
//! - List and search
//! - Add and edit (edit merges the form into the stored record)
//! - Delete (historical transactions keep their item snapshots)

use kasir_core::{Product, ProductInput};
use tracing::{debug, info};

use crate::database::{new_id, Operation, Shared};
use crate::error::{StoreError, StoreResult};

/// Repository for product operations.
///
/// ## Usage
/// ```rust
/// # use kasir_store::Database;
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), kasir_store::StoreError> {
/// let db = Database::in_memory();
/// let repo = db.products();
///
/// let results = repo.search("kopi").await?;
/// assert_eq!(results[0].sku, "KS-001");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ProductRepository {
    shared: Shared,
}

impl ProductRepository {
    pub(crate) fn new(shared: Shared) -> Self {
        ProductRepository { shared }
    }

    /// All products, in insertion order.
    pub async fn get_products(&self) -> StoreResult<Vec<Product>> {
        self.shared.latency(Operation::GetProducts).await;
        let tables = self.shared.tables.read().await;
        debug!(count = tables.products.len(), "Loaded products");
        Ok(tables.products.clone())
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let tables = self.shared.tables.read().await;
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    /// Case-insensitive name search. An empty query returns every product.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Product>> {
        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching products");

        let tables = self.shared.tables.read().await;
        let found: Vec<Product> = tables
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        debug!(count = found.len(), "Search returned products");
        Ok(found)
    }

    /// Adds or edits a product.
    ///
    /// ## Behavior
    /// - `input.id` set: the stored record is overwritten with the form's
    ///   fields and keeps its id; an unknown id is `NotFound`
    /// - `input.id` absent: a new `prod_<uuid>` record is appended
    pub async fn save_product(&self, input: ProductInput) -> StoreResult<Product> {
        self.shared.latency(Operation::SaveProduct).await;
        let mut tables = self.shared.tables.write().await;

        match input.id.clone() {
            Some(id) => {
                let slot = tables
                    .products
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| StoreError::not_found("Product", id.as_str()))?;
                *slot = input.into_product(id);
                info!(id = %slot.id, sku = %slot.sku, "Product updated");
                Ok(slot.clone())
            }
            None => {
                let product = input.into_product(new_id("prod"));
                info!(id = %product.id, sku = %product.sku, "Product added");
                tables.products.push(product.clone());
                Ok(product)
            }
        }
    }

    /// Deletes a product. Deleting an unknown id is a no-op.
    pub async fn delete_product(&self, id: &str) -> StoreResult<()> {
        self.shared.latency(Operation::DeleteProduct).await;
        let mut tables = self.shared.tables.write().await;

        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);

        if tables.products.len() < before {
            info!(id = %id, "Product deleted");
        } else {
            debug!(id = %id, "Delete of unknown product ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use kasir_core::Money;

    fn input(id: Option<&str>, name: &str, sku: &str) -> ProductInput {
        ProductInput {
            id: id.map(str::to_string),
            name: name.to_string(),
            sku: sku.to_string(),
            selling_price: Money::from_rupiah(12_000),
            cost_price: Money::from_rupiah(6_000),
            stock: 20,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_add_product() {
        let db = Database::in_memory();
        let saved = db
            .products()
            .save_product(input(None, "Teh Tarik", "TT-001"))
            .await
            .unwrap();

        assert!(saved.id.starts_with("prod_"));
        let all = db.products().get_products().await.unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all[6], saved);
    }

    #[tokio::test]
    async fn test_edit_product_keeps_id() {
        let db = Database::in_memory();
        let saved = db
            .products()
            .save_product(input(Some("prod_2"), "Americano Ice", "AM-002"))
            .await
            .unwrap();

        assert_eq!(saved.id, "prod_2");
        let stored = db.products().get_by_id("prod_2").await.unwrap().unwrap();
        assert_eq!(stored.name, "Americano Ice");
        assert_eq!(stored.stock, 20);
        assert_eq!(db.products().get_products().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_edit_unknown_product() {
        let db = Database::in_memory();
        let err = db
            .products()
            .save_product(input(Some("prod_404"), "Ghost", "GH-001"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let db = Database::in_memory();
        db.products().delete_product("prod_3").await.unwrap();
        db.products().delete_product("prod_3").await.unwrap();
        assert!(db.products().get_by_id("prod_3").await.unwrap().is_none());
        assert_eq!(db.products().get_products().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_search_case_insensitive() {
        let db = Database::in_memory();
        let found = db.products().search("LATTE").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "prod_5");

        assert_eq!(db.products().search("  ").await.unwrap().len(), 6);
        assert!(db.products().search("pizza").await.unwrap().is_empty());
    }
}
