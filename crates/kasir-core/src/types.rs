//! # Domain Types
//!
//! Core domain types used throughout KasirCerdas.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   Transaction   │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  sku            │   │  items[]        │   │  username       │       │
//! │  │  sellingPrice   │   │  total          │   │  role           │       │
//! │  │  costPrice      │   │  profit         │   └─────────────────┘       │
//! │  │  stock          │   │  date           │                             │
//! │  └─────────────────┘   └─────────────────┘   ┌─────────────────┐       │
//! │                                              │  AppSettings    │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   │  appName, logo  │       │
//! │  │    CartItem     │   │  UserRole/View  │   └─────────────────┘       │
//! │  │  snapshot line  │   │  role gate keys │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize with camelCase field names, which is the contract the
//! front end already speaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,

    /// Stock Keeping Unit - business identifier, e.g. `KS-001`.
    pub sku: String,

    /// Price charged to the customer.
    pub selling_price: Money,

    /// Purchase cost, used for profit and stock value.
    pub cost_price: Money,

    /// Units on hand.
    pub stock: u32,

    /// Optional image as a data URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Checks if `quantity` units can be taken from stock.
    #[inline]
    pub fn can_sell(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }

    /// Margin per unit.
    #[inline]
    pub fn unit_profit(&self) -> Money {
        self.selling_price - self.cost_price
    }

    /// Value of the stock on hand at cost.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.cost_price * self.stock
    }
}

/// Product form payload: `id` is present when editing, absent when adding.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub sku: String,
    pub selling_price: Money,
    pub cost_price: Money,
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductInput {
    /// Builds a product from this input with the given id.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            selling_price: self.selling_price,
            cost_price: self.cost_price,
            stock: self.stock,
            image: self.image.filter(|i| !i.is_empty()),
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        ProductInput {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            sku: product.sku.clone(),
            selling_price: product.selling_price,
            cost_price: product.cost_price,
            stock: product.stock,
            image: product.image.clone(),
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart, and later a line of a transaction.
///
/// Name and price are snapshots taken when the product was first added, so a
/// transaction keeps its history even if the product is edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub selling_price: Money,
    pub quantity: u32,
}

impl CartItem {
    /// Creates a single-unit line from a product.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            selling_price: product.selling_price,
            quantity: 1,
        }
    }

    /// unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.selling_price * self.quantity
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A completed sale. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub profit: Money,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Total number of units sold in this transaction.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// A transaction before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub items: Vec<CartItem>,
    pub total: Money,
    pub profit: Money,
}

impl TransactionDraft {
    /// Stamps the draft with its id and creation time.
    pub fn into_transaction(self, id: String, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            items: self.items,
            total: self.total,
            profit: self.profit,
            date,
        }
    }
}

// =============================================================================
// Users
// =============================================================================

/// The two roles of the POS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access: dashboard, inventory, users, settings.
    Admin,
    /// Cashier: checkout and transaction history only.
    Kasir,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Kasir
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Kasir => write!(f, "kasir"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "kasir" | "cashier" => Ok(UserRole::Kasir),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: vec!["admin".to_string(), "kasir".to_string()],
            }),
        }
    }
}

/// A user as seen by the rest of the system. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// User form payload.
///
/// `password` is required for new users; when editing, `None` or an empty
/// string keeps the current password.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserInput {
    /// The supplied password, if it is non-empty.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    #[inline]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Branding shown in the sidebar and on the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub app_name: String,
    /// Logo as a data URL, empty when unset.
    #[serde(default)]
    pub logo: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            app_name: crate::DEFAULT_APP_NAME.to_string(),
            logo: String::new(),
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// Screens of the application. Keys of the role gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Pos,
    Inventory,
    Transactions,
    Users,
    Settings,
}

impl View {
    /// All views in sidebar order.
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Pos,
        View::Inventory,
        View::Transactions,
        View::Users,
        View::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Pos => "pos",
            View::Inventory => "inventory",
            View::Transactions => "transactions",
            View::Users => "users",
            View::Settings => "settings",
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "view".to_string(),
                allowed: View::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn americano() -> Product {
        Product {
            id: "prod_2".to_string(),
            name: "Americano".to_string(),
            sku: "AM-001".to_string(),
            selling_price: Money::from_rupiah(15_000),
            cost_price: Money::from_rupiah(7_000),
            stock: 30,
            image: None,
        }
    }

    #[test]
    fn test_product_helpers() {
        let product = americano();
        assert!(product.can_sell(30));
        assert!(!product.can_sell(31));
        assert_eq!(product.unit_profit().rupiah(), 8_000);
        assert_eq!(product.stock_value().rupiah(), 210_000);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(americano()).unwrap();
        assert_eq!(json["sellingPrice"], 15_000);
        assert_eq!(json["costPrice"], 7_000);
        assert_eq!(json["stock"], 30);
    }

    #[test]
    fn test_product_input_drops_empty_image() {
        let mut input = ProductInput::from(&americano());
        input.image = Some(String::new());
        input.name = "  Americano Ice ".to_string();
        let product = input.into_product("prod_9".to_string());
        assert_eq!(product.image, None);
        assert_eq!(product.name, "Americano Ice");
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("KASIR".parse::<UserRole>().unwrap(), UserRole::Kasir);
        assert!("manager".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Kasir.to_string(), "kasir");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_view_parse() {
        assert_eq!("pos".parse::<View>().unwrap(), View::Pos);
        assert_eq!(" Settings ".parse::<View>().unwrap(), View::Settings);
        assert!("reports".parse::<View>().is_err());
    }

    #[test]
    fn test_user_input_password_rules() {
        let edit = UserInput {
            id: Some("user_1".to_string()),
            username: "admin".to_string(),
            role: UserRole::Admin,
            password: Some(String::new()),
        };
        assert!(edit.is_edit());
        assert_eq!(edit.new_password(), None);
    }

    #[test]
    fn test_settings_default() {
        let settings = AppSettings::default();
        assert_eq!(settings.app_name, "KasirCerdas");
        assert!(settings.logo.is_empty());
    }
}
