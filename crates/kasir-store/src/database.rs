//! # Database Handle
//!
//! Store creation, configuration and simulated latency.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Database (cheap to clone)                           │
//! │                                                                         │
//! │   Arc<RwLock<MemoryDb>>          Arc<dyn SessionStorage>                │
//! │   ├── products                   └── "pos-user" → User JSON             │
//! │   ├── transactions                                                      │
//! │   ├── users (with passwords)     Latency                                │
//! │   └── settings                   └── per-operation sleep when enabled   │
//! │                                                                         │
//! │   .products()  .transactions()  .users()  .settings()  .auth()          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads take the read lock, writes take the write lock. A checkout is one
//! write-lock section so the new transaction and the stock write-back are
//! observed together.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use kasir_core::{AppSettings, Product, Transaction};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::AuthService;
use crate::repository::product::ProductRepository;
use crate::repository::settings::SettingsRepository;
use crate::repository::transaction::TransactionRepository;
use crate::repository::user::{UserAccount, UserRepository};
use crate::seed;
use crate::session::{FileSessionStorage, MemorySessionStorage, SessionStorage};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use kasir_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .simulate_latency(true)
///     .seed(false);
/// assert!(config.simulate_latency);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Sleep before each operation like a remote backend would.
    /// Default: false
    pub simulate_latency: bool,

    /// Load the demo products, users and settings at startup.
    /// Default: true
    pub seed: bool,

    /// Directory for file-backed session storage. `None` keeps the session
    /// in memory.
    pub session_dir: Option<PathBuf>,
}

impl StoreConfig {
    pub fn new() -> Self {
        StoreConfig {
            simulate_latency: false,
            seed: true,
            session_dir: None,
        }
    }

    pub fn simulate_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }

    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new()
    }
}

// =============================================================================
// Simulated Latency
// =============================================================================

/// Store operations that carry a simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetProducts,
    SaveProduct,
    DeleteProduct,
    GetTransactions,
    SaveTransaction,
    Login,
    Logout,
    GetCurrentUser,
    GetUsers,
    SaveUser,
    DeleteUser,
    GetAppSettings,
    SaveAppSettings,
}

impl Operation {
    pub fn delay(&self) -> Duration {
        let ms = match self {
            Operation::GetProducts => 100,
            Operation::SaveProduct => 200,
            Operation::DeleteProduct => 200,
            Operation::GetTransactions => 100,
            Operation::SaveTransaction => 300,
            Operation::Login => 300,
            Operation::Logout => 100,
            Operation::GetCurrentUser => 50,
            Operation::GetUsers => 100,
            Operation::SaveUser => 200,
            Operation::DeleteUser => 200,
            Operation::GetAppSettings => 50,
            Operation::SaveAppSettings => 200,
        };
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Tables
// =============================================================================

/// The in-memory tables.
#[derive(Debug, Default)]
pub(crate) struct MemoryDb {
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
    pub users: Vec<UserAccount>,
    pub settings: AppSettings,
}

impl MemoryDb {
    fn seeded() -> Self {
        MemoryDb {
            products: seed::products(),
            transactions: Vec::new(),
            users: seed::users(),
            settings: seed::settings(),
        }
    }
}

/// Shared pieces every repository needs.
#[derive(Clone)]
pub(crate) struct Shared {
    pub tables: Arc<RwLock<MemoryDb>>,
    pub session: Arc<dyn SessionStorage>,
    pub simulate_latency: bool,
}

impl Shared {
    /// Sleeps for the operation's delay when latency simulation is on.
    pub async fn latency(&self, op: Operation) {
        if self.simulate_latency {
            tokio::time::sleep(op.delay()).await;
        }
    }
}

/// New record id: `<prefix>_<uuid>`.
pub(crate) fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4())
}

// =============================================================================
// Database
// =============================================================================

/// Main store handle providing repository access.
///
/// ## Usage
/// ```rust
/// use kasir_store::{Database, StoreConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), kasir_store::StoreError> {
/// let db = Database::new(StoreConfig::new());
/// let settings = db.settings().get_app_settings().await?;
/// assert_eq!(settings.app_name, "KasirCerdas");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Database {
    shared: Shared,
}

impl Database {
    /// Creates a store from configuration.
    ///
    /// Session storage is file-backed when `session_dir` is set, in memory
    /// otherwise.
    pub fn new(config: StoreConfig) -> Self {
        let session: Arc<dyn SessionStorage> = match &config.session_dir {
            Some(dir) => Arc::new(FileSessionStorage::new(dir.clone())),
            None => Arc::new(MemorySessionStorage::new()),
        };
        Database::with_session(config, session)
    }

    /// Creates a store with an explicit session backend.
    pub fn with_session(config: StoreConfig, session: Arc<dyn SessionStorage>) -> Self {
        let tables = if config.seed {
            MemoryDb::seeded()
        } else {
            MemoryDb::default()
        };

        info!(
            seeded = config.seed,
            simulate_latency = config.simulate_latency,
            products = tables.products.len(),
            users = tables.users.len(),
            "Store initialized"
        );

        Database {
            shared: Shared {
                tables: Arc::new(RwLock::new(tables)),
                session,
                simulate_latency: config.simulate_latency,
            },
        }
    }

    /// In-memory seeded store without latency (for testing).
    pub fn in_memory() -> Self {
        Database::new(StoreConfig::new())
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.shared.clone())
    }

    pub fn transactions(&self) -> TransactionRepository {
        TransactionRepository::new(self.shared.clone())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.shared.clone())
    }

    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.shared.clone())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.shared.clone())
    }

    /// Resets the tables to the seed data. The session is left alone.
    pub async fn reset(&self) {
        let mut tables = self.shared.tables.write().await;
        *tables = MemoryDb::seeded();
        debug!("Store reset to seed data");
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("simulate_latency", &self.shared.simulate_latency)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_table() {
        assert_eq!(Operation::SaveTransaction.delay(), Duration::from_millis(300));
        assert_eq!(Operation::GetCurrentUser.delay(), Duration::from_millis(50));
        assert_eq!(Operation::SaveAppSettings.delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_new_id_prefix() {
        let a = new_id("prod");
        let b = new_id("prod");
        assert!(a.starts_with("prod_"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_unseeded_store_is_empty() {
        let db = Database::new(StoreConfig::new().seed(false));
        assert!(db.products().get_products().await.unwrap().is_empty());
        assert!(db.users().get_users().await.unwrap().is_empty());
        assert_eq!(db.settings().get_app_settings().await.unwrap(), AppSettings::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let db = Database::new(StoreConfig::new().simulate_latency(true));
        let start = tokio::time::Instant::now();
        db.products().get_products().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let db = Database::in_memory();
        db.products().delete_product("prod_1").await.unwrap();
        assert_eq!(db.products().get_products().await.unwrap().len(), 5);

        db.reset().await;
        assert_eq!(db.products().get_products().await.unwrap().len(), 6);
    }
}
