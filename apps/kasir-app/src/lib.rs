//! # KasirCerdas Application Library
//!
//! Root controller of the POS: loads configuration, builds the shared state
//! and serves one JSON route per front-end command.
//!
//! ## Module Organization
//! ```text
//! kasir_app/
//! ├── lib.rs          ◄─── You are here (router, tracing, run)
//! ├── config.rs       ◄─── AppConfig: defaults → kasir.toml → KASIR_* env
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (store, cart, view, config)
//! │   ├── cart.rs     ◄─── CartState
//! │   └── view.rs     ◄─── ViewState
//! ├── commands/       ◄─── One module per screen
//! └── error.rs        ◄─── ApiError { code, message } → HTTP status
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()            RUST_LOG or "info,kasir=debug"            │
//! │  2. AppConfig::load()         file + env, validated                     │
//! │  3. AppState::new(config)     seeded store, empty cart                  │
//! │  4. router(state)             /api/* + /health                          │
//! │  5. axum::serve               until Ctrl-C                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{app, auth, cart, dashboard, navigation, product, sale, settings, user};
use config::AppConfig;
use state::AppState;

/// Builds the HTTP router.
///
/// ## Routes
/// ```text
/// GET    /health
/// GET    /api/bootstrap
/// POST   /api/auth/login            GET /api/auth/me     POST /api/auth/logout
/// POST   /api/navigation            GET /api/navigation/items
/// GET    /api/products              POST /api/products   GET /api/products/search?q=
/// GET    /api/products/{id}         DELETE /api/products/{id}
/// GET    /api/cart                  DELETE /api/cart
/// POST   /api/cart/items            PUT|DELETE /api/cart/items/{product_id}
/// POST   /api/sale/checkout
/// GET    /api/transactions          GET /api/transactions/{id}
/// GET    /api/users                 POST /api/users      DELETE /api/users/{id}
/// GET    /api/settings              PUT /api/settings
/// GET    /api/dashboard
/// ```
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/bootstrap", get(app::bootstrap))
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::current_user))
        // Navigation
        .route("/navigation", post(navigation::navigate))
        .route("/navigation/items", get(navigation::nav_items))
        // Products
        .route("/products", get(product::list_products).post(product::save_product))
        .route("/products/search", get(product::search_products))
        .route(
            "/products/{id}",
            get(product::get_product).delete(product::delete_product),
        )
        // Cart
        .route("/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/cart/items", post(cart::add_to_cart))
        .route(
            "/cart/items/{product_id}",
            put(cart::update_cart_item).delete(cart::remove_from_cart),
        )
        // Sales
        .route("/sale/checkout", post(sale::checkout))
        .route("/transactions", get(sale::list_transactions))
        .route("/transactions/{id}", get(sale::get_transaction))
        // Users
        .route("/users", get(user::list_users).post(user::save_user))
        .route("/users/{id}", delete(user::delete_user))
        // Settings
        .route("/settings", get(settings::get_settings).put(settings::save_settings))
        // Dashboard
        .route("/dashboard", get(dashboard::get_dashboard));

    Router::new()
        .route("/health", get(app::health))
        .nest("/api", api)
        .with_state(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kasir_store=trace` - Trace the data layer only
/// - Default: INFO, DEBUG for the kasir crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kasir=debug"));

    // A second init (tests, embedding) is not an error.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Runs the server until Ctrl-C.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting KasirCerdas");

    let config = AppConfig::load(None)?;
    let addr = config.bind_address()?;
    let state = AppState::new(config);

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
