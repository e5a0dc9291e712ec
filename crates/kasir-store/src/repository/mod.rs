//! # Repository Module
//!
//! Per-entity access to the in-memory tables.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  kasir-app command                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products() / db.transactions() / db.users() / db.settings()        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  latency (optional) → lock → read or mutate table → clone out          │
//! │                                                                         │
//! │  Every repository returns owned values, never references into the      │
//! │  tables, so no lock outlives a call.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search
//! - [`TransactionRepository`](transaction::TransactionRepository) - Sales history and checkout persistence
//! - [`UserRepository`](user::UserRepository) - User accounts
//! - [`SettingsRepository`](settings::SettingsRepository) - App branding

pub mod product;
pub mod settings;
pub mod transaction;
pub mod user;
