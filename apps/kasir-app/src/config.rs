//! # Application Configuration
//!
//! ## Load Order (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`kasir.toml` in the platform config dir, or `KASIR_CONFIG`)
//! 3. Environment variables (`KASIR_*`)
//!
//! ## Example `kasir.toml`
//! ```toml
//! bind_addr = "0.0.0.0:8787"
//! simulate_latency = true
//! seed = true
//! session_dir = "/var/lib/kasir/session"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use kasir_store::StoreConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: String,

    /// Delay store operations like a remote backend.
    pub simulate_latency: bool,

    /// Start with the demo products and accounts.
    pub seed: bool,

    /// Keep the login session in files here so it survives restarts.
    pub session_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            simulate_latency: false,
            seed: true,
            session_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file and environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = config_path.or_else(default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = AppConfig::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `KASIR_*` overrides read through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("KASIR_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.bind_addr = addr;
        }

        if let Some(value) = lookup("KASIR_SIMULATE_LATENCY") {
            match parse_bool(&value) {
                Some(enabled) => self.simulate_latency = enabled,
                None => warn!(value = %value, "Ignoring invalid KASIR_SIMULATE_LATENCY"),
            }
        }

        if let Some(value) = lookup("KASIR_SEED") {
            match parse_bool(&value) {
                Some(seed) => self.seed = seed,
                None => warn!(value = %value, "Ignoring invalid KASIR_SEED"),
            }
        }

        if let Some(dir) = lookup("KASIR_SESSION_DIR") {
            self.session_dir = if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address().map(|_| ())
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("bind_addr is not a socket address: {}", self.bind_addr)))
    }

    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::new()
            .simulate_latency(self.simulate_latency)
            .seed(self.seed);
        match &self.session_dir {
            Some(dir) => config.session_dir(dir.clone()),
            None => config,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `KASIR_CONFIG`, else `kasir.toml` in the platform config directory.
fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("KASIR_CONFIG") {
        return Some(PathBuf::from(path));
    }
    directories::ProjectDirs::from("id", "kasircerdas", "kasir")
        .map(|dirs| dirs.config_dir().join("kasir.toml"))
}
