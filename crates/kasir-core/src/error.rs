//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  kasir-store errors (separate crate)                                   │
//! │  └── StoreError       - Data layer failures                            │
//! │                                                                         │
//! │  kasir-app errors                                                      │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
///
/// Each variant corresponds to an alert the cashier or admin sees.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product has no stock left and cannot be added to the cart.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// The requested cart quantity is above the product's stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart has Americano x30, stock = 30
    ///      │
    ///      ▼
    /// Click Americano again
    ///      │
    ///      ▼
    /// QuantityExceedsStock { name: "Americano", available: 30, requested: 31 }
    ///      │
    ///      ▼
    /// UI shows: "Quantity exceeds available stock"
    /// ```
    #[error("Quantity for {name} exceeds available stock: available {available}, requested {requested}")]
    QuantityExceedsStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Stock would go negative while committing a checkout.
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: u32,
        requested: u32,
    },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Product is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(String),

    /// A user tried to delete their own account.
    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn too_long(field: &str, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.to_string(),
            max,
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
