//! # Seed Data
//!
//! The demo coffee shop the store starts with.
//!
//! ```text
//! ┌──────────┬─────────────────────┬────────┬────────┬────────┬───────┐
//! │ id       │ name                │ sku    │ sell   │ cost   │ stock │
//! ├──────────┼─────────────────────┼────────┼────────┼────────┼───────┤
//! │ prod_1   │ Kopi Susu Gula Aren │ KS-001 │ 18.000 │ 10.000 │ 50    │
//! │ prod_2   │ Americano           │ AM-001 │ 15.000 │  7.000 │ 30    │
//! │ prod_3   │ Croissant Cokelat   │ CR-001 │ 22.000 │ 12.000 │ 25    │
//! │ prod_4   │ Red Velvet Cake     │ RV-001 │ 35.000 │ 20.000 │ 15    │
//! │ prod_5   │ Matcha Latte        │ ML-001 │ 25.000 │ 15.000 │ 40    │
//! │ prod_6   │ Donat Gula          │ DN-001 │ 10.000 │  4.000 │ 60    │
//! └──────────┴─────────────────────┴────────┴────────┴────────┴───────┘
//! ```

use kasir_core::{AppSettings, Money, Product, UserRole};

use crate::repository::user::UserAccount;

pub fn products() -> Vec<Product> {
    [
        ("prod_1", "Kopi Susu Gula Aren", "KS-001", 18_000, 10_000, 50),
        ("prod_2", "Americano", "AM-001", 15_000, 7_000, 30),
        ("prod_3", "Croissant Cokelat", "CR-001", 22_000, 12_000, 25),
        ("prod_4", "Red Velvet Cake", "RV-001", 35_000, 20_000, 15),
        ("prod_5", "Matcha Latte", "ML-001", 25_000, 15_000, 40),
        ("prod_6", "Donat Gula", "DN-001", 10_000, 4_000, 60),
    ]
    .into_iter()
    .map(|(id, name, sku, sell, cost, stock)| Product {
        id: id.to_string(),
        name: name.to_string(),
        sku: sku.to_string(),
        selling_price: Money::from_rupiah(sell),
        cost_price: Money::from_rupiah(cost),
        stock,
        image: None,
    })
    .collect()
}

pub fn users() -> Vec<UserAccount> {
    vec![
        UserAccount::new("user_1", "admin", UserRole::Admin, "admin123"),
        UserAccount::new("user_2", "kasir", UserRole::Kasir, "kasir123"),
    ]
}

pub fn settings() -> AppSettings {
    AppSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products() {
        let products = products();
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].sku, "KS-001");
        assert_eq!(products[3].stock, 15);
        let stock_value: Money = products.iter().map(Product::stock_value).sum();
        assert_eq!(stock_value.rupiah(), 2_150_000);
    }

    #[test]
    fn test_seed_users() {
        let users = users();
        assert_eq!(users[0].role, UserRole::Admin);
        assert!(users[1].password_matches("kasir123"));
    }
}
