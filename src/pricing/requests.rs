//! Request DTOs for pricing API endpoints.
//!
//! Amounts accept JSON numbers or decimal strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::format::DEFAULT_CURRENCY;

/// Request to compute a display price
#[derive(Debug, Deserialize)]
pub struct DisplayPriceRequest {
    pub base_price: Decimal,
}

/// Request to recover an original price
#[derive(Debug, Deserialize)]
pub struct OriginalPriceRequest {
    pub display_price: Decimal,
}

/// Request to calculate a price breakdown or booking total
#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    pub display_price_per_unit: Decimal,
    pub quantity: i32,
    #[serde(default)]
    pub is_pay_later: bool,
    #[serde(default)]
    pub is_tour: bool,
}

/// Request to format an amount
#[derive(Debug, Deserialize)]
pub struct FormatPriceRequest {
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Request to quote a property stay
#[derive(Debug, Deserialize)]
pub struct PropertyQuoteRequest {
    #[serde(default)]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub display_price: Option<Decimal>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub pay_at_property: bool,
}

/// Request to quote a tour
#[derive(Debug, Deserialize)]
pub struct TourQuoteRequest {
    #[serde(default)]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub display_price: Option<Decimal>,
    pub participants: i32,
    #[serde(default)]
    pub pay_at_tour: bool,
}
