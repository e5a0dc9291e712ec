//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Repository call                                                        │
//! │       │                                                                 │
//! │       ├── id not in table ─────────► StoreError::NotFound               │
//! │       ├── rule violated ───────────► StoreError::Core(CoreError)        │
//! │       ├── session file unreadable ─► StoreError::Session / Io           │
//! │       └── session JSON corrupt ────► StoreError::Serialization          │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                   ApiError (kasir-app)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kasir_core::CoreError;
use thiserror::Error;

/// Data layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Editing a product or user whose id does not exist
    /// - Looking up a transaction by an unknown id
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Session storage failed (lock poisoned, bad key, ...).
    #[error("Session storage error: {0}")]
    Session(String),

    /// File-backed session storage I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored session value is not valid JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Business rule violation raised while writing.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
