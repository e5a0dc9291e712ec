//! # API Error Type
//!
//! Unified error type for command handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in KasirCerdas                            │
//! │                                                                         │
//! │  Front end                   Rust Backend                               │
//! │  ─────────                   ────────────                               │
//! │                                                                         │
//! │  POST /api/sale/checkout                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler → Result<Json<T>, ApiError>                             │  │
//! │  │         │                                                        │  │
//! │  │         ├── StoreError::NotFound ────────────► NOT_FOUND (404)   │  │
//! │  │         ├── CoreError::EmptyCart ────────────► CART_ERROR (422)  │  │
//! │  │         ├── CoreError::InsufficientStock ────► INSUFFICIENT_STOCK│  │
//! │  │         ├── ValidationError ─────────────────► VALIDATION_ERROR  │  │
//! │  │         └── no session / wrong role ─────────► UNAUTHORIZED /    │  │
//! │  │                                                ACCESS_DENIED      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── { "code": "CART_ERROR", "message": "Keranjang kosong!" }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages for business rules and form validation are the alerts the
//! cashier sees, in Indonesian. Internal failures keep the underlying error
//! text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kasir_core::{CoreError, Money, ValidationError};
use kasir_store::StoreError;
use serde::Serialize;
use tracing::{debug, error};

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "ACCESS_DENIED",
///   "message": "Akses Ditolak"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// No user logged in (401)
    Unauthorized,

    /// Wrong username or password (401)
    InvalidCredentials,

    /// Role may not open this screen (403)
    AccessDenied,

    /// Business rule rejected the request (422)
    BusinessLogic,

    /// Cart operation rejected (422)
    CartError,

    /// Checkout would oversell (409)
    InsufficientStock,

    /// Session storage failed (500)
    StorageError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized | ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ErrorCode::AccessDenied => StatusCode::FORBIDDEN,
            ErrorCode::BusinessLogic | ErrorCode::CartError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InsufficientStock => StatusCode::CONFLICT,
            ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Silakan login terlebih dahulu.")
    }

    pub fn invalid_credentials() -> Self {
        ApiError::new(ErrorCode::InvalidCredentials, "Username atau password salah.")
    }

    pub fn access_denied() -> Self {
        ApiError::new(
            ErrorCode::AccessDenied,
            "Akses Ditolak: Anda tidak memiliki izin untuk mengakses halaman ini.",
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

/// Form label shown on screen for a validated field.
fn field_label(field: &str) -> &str {
    match field {
        "name" => "Nama Produk",
        "sku" => "SKU",
        "sellingPrice" => "Harga Jual",
        "costPrice" => "Harga Beli",
        "username" => "Username",
        "password" => "Password",
        "appName" => "Nama Aplikasi",
        "query" => "Pencarian",
        other => other,
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        debug!(error = %err, "Validation failed");
        let message = match &err {
            ValidationError::Required { field } if field == "password" => {
                "Password wajib diisi untuk pengguna baru.".to_string()
            }
            ValidationError::Required { field } => format!("{} wajib diisi.", field_label(field)),
            ValidationError::TooLong { field, max } => {
                format!("{} maksimal {} karakter.", field_label(field), max)
            }
            // Only prices are range-checked.
            ValidationError::OutOfRange { field, min, max } => format!(
                "{} harus antara {} dan {}.",
                field_label(field),
                Money::from_rupiah(*min),
                Money::from_rupiah(*max)
            ),
            ValidationError::InvalidFormat { field, .. } => {
                format!("Format {} tidak valid.", field_label(field))
            }
            ValidationError::NotAllowed { field, allowed } => format!(
                "{} harus salah satu dari: {}.",
                field_label(field),
                allowed.join(", ")
            ),
        };
        ApiError::validation(message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OutOfStock { .. } => ApiError::new(ErrorCode::CartError, "Stok produk habis!"),
            CoreError::QuantityExceedsStock { .. } => {
                ApiError::new(ErrorCode::CartError, "Jumlah melebihi stok yang tersedia!")
            }
            CoreError::EmptyCart => ApiError::new(ErrorCode::CartError, "Keranjang kosong!"),
            CoreError::NotInCart(_) => {
                ApiError::new(ErrorCode::CartError, "Produk tidak ada di keranjang.")
            }
            CoreError::InsufficientStock {
                sku,
                available,
                requested,
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Jumlah melebihi stok yang tersedia! ({}: tersedia {}, diminta {})",
                    sku, available, requested
                ),
            ),
            CoreError::CannotDeleteSelf => ApiError::new(
                ErrorCode::BusinessLogic,
                "Anda tidak dapat menghapus akun Anda sendiri.",
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::Core(e) => e.into(),
            other => {
                error!(error = %other, "Storage failure");
                ApiError::new(ErrorCode::StorageError, other.to_string())
            }
        }
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let json = serde_json::to_value(ApiError::access_denied()).unwrap();
        assert_eq!(json["code"], "ACCESS_DENIED");
        assert!(json["message"].as_str().unwrap().starts_with("Akses Ditolak"));
    }

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Keranjang kosong!");

        let err: ApiError = CoreError::InsufficientStock {
            sku: "RV-001".to_string(),
            available: 1,
            requested: 2,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.code.status(), StatusCode::CONFLICT);
        assert_eq!(
            err.message,
            "Jumlah melebihi stok yang tersedia! (RV-001: tersedia 1, diminta 2)"
        );
    }

    #[test]
    fn test_validation_messages_are_indonesian() {
        let err: ApiError = ValidationError::Required {
            field: "password".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Password wajib diisi untuk pengguna baru.");

        let err: ApiError = ValidationError::Required {
            field: "sku".to_string(),
        }
        .into();
        assert_eq!(err.message, "SKU wajib diisi.");

        let err: ApiError = CoreError::Validation(ValidationError::OutOfRange {
            field: "costPrice".to_string(),
            min: 0,
            max: 1_000_000,
        })
        .into();
        assert_eq!(err.message, "Harga Beli harus antara Rp 0 dan Rp 1.000.000.");

        let err: ApiError = ValidationError::TooLong {
            field: "appName".to_string(),
            max: 100,
        }
        .into();
        assert_eq!(err.message, "Nama Aplikasi maksimal 100 karakter.");
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::not_found("User", "user_9").into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = StoreError::Core(CoreError::CannotDeleteSelf).into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let err: ApiError = StoreError::Session("poisoned".to_string()).into();
        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::invalid_credentials().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
