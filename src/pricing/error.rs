//! Validation errors raised by the pricing engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("{field} must not be negative (got {amount})")]
    NegativeAmount { field: &'static str, amount: Decimal },

    #[error("quantity must not be negative (got {quantity})")]
    NegativeQuantity { quantity: i32 },

    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("unsupported currency code '{code}'")]
    UnsupportedCurrency { code: String },

    #[error("price source error: {message}")]
    PriceSource { message: String },

    #[error("configuration error: {message}")]
    InvalidConfig { message: String },

    #[error("amount overflow while computing {operation}")]
    Overflow { operation: &'static str },
}

impl PricingError {
    /// Stable machine-readable name used in API error bodies.
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::NegativeAmount { .. } => "negative_amount",
            PricingError::NegativeQuantity { .. } => "negative_quantity",
            PricingError::InvalidStay { .. } => "invalid_stay",
            PricingError::UnsupportedCurrency { .. } => "unsupported_currency",
            PricingError::PriceSource { .. } => "price_source",
            PricingError::InvalidConfig { .. } => "invalid_config",
            PricingError::Overflow { .. } => "overflow",
        }
    }
}
