//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Currency;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an identifier.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Promo code did not match any known code.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// Percentage outside 0..=100.
    #[error("Invalid percentage: {0} (expected 0-100)")]
    InvalidPercent(u8),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Store configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CommerceError {
    pub(crate) fn currency_mismatch(expected: Currency, got: Currency) -> Self {
        CommerceError::CurrencyMismatch {
            expected: expected.code().to_string(),
            got: got.code().to_string(),
        }
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
