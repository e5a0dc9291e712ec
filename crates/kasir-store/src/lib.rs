//! # kasir-store: Data Layer for KasirCerdas
//!
//! In-memory storage for products, transactions, users and app settings,
//! plus login and session handling.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        KasirCerdas Data Flow                            │
//! │                                                                         │
//! │  kasir-app command (checkout)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   kasir-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │   Session    │  │   │
//! │  │   │ (database.rs) │    │               │    │ (session.rs) │  │   │
//! │  │   │               │    │ Products      │    │              │  │   │
//! │  │   │ RwLock<Mem>   │◄───│ Transactions  │    │ Memory/File  │  │   │
//! │  │   │ Latency       │    │ Users         │    │ "pos-user"   │  │   │
//! │  │   │ Seed          │    │ Settings      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                               Auth ─────────────────┘          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`database`] - Store handle, configuration and simulated latency
//! - [`seed`] - Initial data
//! - [`repository`] - Per-entity repositories
//! - [`auth`] - Login, logout, current user
//! - [`session`] - Session storage backends
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use kasir_store::{Database, StoreConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), kasir_store::StoreError> {
//! let db = Database::new(StoreConfig::new());
//! let products = db.products().get_products().await?;
//! assert_eq!(products.len(), 6);
//!
//! let admin = db.auth().login("admin", "admin123").await?;
//! assert!(admin.is_some());
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod database;
pub mod error;
pub mod repository;
pub mod seed;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::AuthService;
pub use database::{Database, Operation, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use session::{FileSessionStorage, MemorySessionStorage, SessionStorage, SESSION_KEY};

pub use repository::product::ProductRepository;
pub use repository::settings::SettingsRepository;
pub use repository::transaction::TransactionRepository;
pub use repository::user::UserRepository;
