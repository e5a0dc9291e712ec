//! # State Module
//!
//! Application state shared by every handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState (Clone, handed to axum via with_state)                        │
//! │                                                                         │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌──────────────────┐  │
//! │  │  Database  │  │ CartState  │  │ ViewState  │  │ Arc<AppConfig>   │  │
//! │  │  (store)   │  │ Mutex<Cart>│  │ RwLock<V>  │  │ read-only        │  │
//! │  └────────────┘  └────────────┘  └────────────┘  └──────────────────┘  │
//! │                                                                         │
//! │  Each piece is independently locked; a cart edit never waits on the    │
//! │  store's table lock and vice versa.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod view;

use std::sync::Arc;

use kasir_store::Database;

use crate::config::AppConfig;

pub use cart::CartState;
pub use view::ViewState;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cart: CartState,
    pub view: ViewState,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let db = Database::new(config.store_config());
        AppState::with_database(db, config)
    }

    pub fn with_database(db: Database, config: AppConfig) -> Self {
        AppState {
            db,
            cart: CartState::new(),
            view: ViewState::new(),
            config: Arc::new(config),
        }
    }
}
