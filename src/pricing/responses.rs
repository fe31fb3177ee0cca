//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{BookingKind, PriceBreakdown};
use super::services::BookingQuote;

/// Response for display price calculation
#[derive(Debug, Serialize)]
pub struct DisplayPriceResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub display_price: Decimal,
}

/// Response for original price recovery
#[derive(Debug, Serialize)]
pub struct OriginalPriceResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub display_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_price: Decimal,
}

/// Price breakdown as shown at checkout. Never carries a markup line.
#[derive(Debug, Serialize)]
pub struct PriceBreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cleaning_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub service_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub taxes: Decimal,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub pay_at_property_fee: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl From<PriceBreakdown> for PriceBreakdownResponse {
    fn from(breakdown: PriceBreakdown) -> Self {
        Self {
            price: breakdown.price,
            subtotal: breakdown.subtotal,
            cleaning_fee: breakdown.cleaning_fee,
            service_fee: breakdown.service_fee,
            taxes: breakdown.taxes,
            pay_at_property_fee: breakdown.pay_at_property_fee,
            total: breakdown.total,
        }
    }
}

/// Response for booking total
#[derive(Debug, Serialize)]
pub struct BookingTotalResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub formatted_total: String,
}

/// Response for price formatting
#[derive(Debug, Serialize)]
pub struct FormatPriceResponse {
    pub formatted: String,
}

/// Response for a property or tour quote
#[derive(Debug, Serialize)]
pub struct BookingQuoteResponse {
    pub kind: BookingKind,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub display_price: Decimal,
    pub quantity: i32,
    pub unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    pub breakdown: PriceBreakdownResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_later_fee_label: Option<String>,
    pub formatted_total: String,
}

impl From<BookingQuote> for BookingQuoteResponse {
    fn from(quote: BookingQuote) -> Self {
        Self {
            kind: quote.kind,
            original_price: quote.original_price,
            display_price: quote.display_price,
            quantity: quote.quantity,
            unit: quote.kind.unit(),
            check_in: quote.check_in,
            check_out: quote.check_out,
            breakdown: quote.breakdown.into(),
            pay_later_fee_label: quote.pay_later_fee_label,
            formatted_total: quote.formatted_total,
        }
    }
}

/// Response for health checks
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
