//! # Validation Module
//!
//! Form validation for the inventory, user and settings screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end form                                               │
//! │  └── Required markers, immediate feedback                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: kasir-app command                                            │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: kasir-store                                                  │
//! │  └── Existence checks, stock never negative                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::validation::{validate_sku, validate_search_query};
//!
//! assert!(validate_sku("KS-001").is_ok());
//! assert_eq!(validate_search_query("  kopi ").unwrap(), "kopi");
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{AppSettings, ProductInput, UserInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_SKU_LEN: usize = 50;
const MAX_PRODUCT_NAME_LEN: usize = 200;
const MAX_USERNAME_LEN: usize = 50;
const MAX_APP_NAME_LEN: usize = 100;
const MAX_QUERY_LEN: usize = 100;

/// Highest accepted price, Rp 1.000.000.000.000.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a SKU.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, digits, hyphens and underscores
///
/// ## Example
/// ```rust
/// use kasir_core::validation::validate_sku;
///
/// assert!(validate_sku("AM-001").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("AM 001").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::required("sku"));
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::too_long("sku", MAX_SKU_LEN));
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: required, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates a price: between zero and [`MAX_PRICE`] inclusive.
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if !(0..=MAX_PRICE).contains(&price.rupiah()) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE,
        });
    }
    Ok(())
}

pub fn validate_username(username: &str) -> ValidationResult<()> {
    validate_text("username", username, MAX_USERNAME_LEN)
}

pub fn validate_app_name(app_name: &str) -> ValidationResult<()> {
    validate_text("appName", app_name, MAX_APP_NAME_LEN)
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - At most 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::too_long("query", MAX_QUERY_LEN));
    }

    Ok(query.to_string())
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > max {
        return Err(ValidationError::too_long(field, max));
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the product form (add and edit).
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    validate_product_name(&input.name)?;
    validate_sku(&input.sku)?;
    validate_price("sellingPrice", input.selling_price)?;
    validate_price("costPrice", input.cost_price)?;
    Ok(())
}

/// Validates the user form.
///
/// A password is required when adding a user. When editing, an empty
/// password means "keep the current one".
pub fn validate_user_input(input: &UserInput) -> ValidationResult<()> {
    validate_username(&input.username)?;

    if !input.is_edit() && input.new_password().is_none() {
        return Err(ValidationError::required("password"));
    }

    Ok(())
}

pub fn validate_settings(settings: &AppSettings) -> ValidationResult<()> {
    validate_app_name(&settings.app_name)
}

// =============================================================================
// Unit Tests
// =============================================================================
