//! # kasir-core: Pure Business Logic for KasirCerdas
//!
//! This crate holds every business rule of the point-of-sale as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        KasirCerdas Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (browser)                          │   │
//! │  │  Dashboard  POS  Inventory  Transactions  Users  Settings       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kasir-app commands                           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   types   money   cart   checkout   access   validation  report │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kasir-store (data layer)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, User, AppSettings, View)
//! - [`money`] - Rupiah amounts with integer arithmetic
//! - [`cart`] - Cart accumulation with stock checks
//! - [`checkout`] - Total, profit and stock reconciliation
//! - [`access`] - Role gate for views
//! - [`validation`] - Form validation rules
//! - [`report`] - Dashboard aggregation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_rupiah(18_000);
//! assert_eq!((price * 2).to_string(), "Rp 36.000");
//! ```

pub mod access;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// These allow users to do `use kasir_core::Money` instead of
// `use kasir_core::money::Money`
pub use cart::Cart;
pub use checkout::{checkout, CheckoutPlan};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

/// Products whose stock falls below this level are flagged on the dashboard.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Number of active days shown in the dashboard charts.
pub const CHART_DAYS: usize = 10;

/// Default application name shown on the login screen and sidebar.
pub const DEFAULT_APP_NAME: &str = "KasirCerdas";
