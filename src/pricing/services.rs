//! Booking quote services.
//!
//! Combine price resolution, stay length and the breakdown into the quote a
//! checkout page renders for a property stay or a tour.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::calculators::{BookingKind, PriceBreakdown, PricingEngine};
use super::error::PricingError;
use super::format::format_usd;
use super::stays::nights_between;

/// Where a quote's per-unit price comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceSource {
    /// Amount the host or guide receives; the display price is derived.
    Base(Decimal),
    /// Display price stored on an existing record; the base is recovered.
    Display(Decimal),
}

impl PriceSource {
    /// Build from request fields where exactly one of the two is set.
    pub fn from_fields(
        base_price: Option<Decimal>,
        display_price: Option<Decimal>,
    ) -> Result<Self, PricingError> {
        match (base_price, display_price) {
            (Some(base), None) => Ok(PriceSource::Base(base)),
            (None, Some(display)) => Ok(PriceSource::Display(display)),
            (Some(_), Some(_)) => Err(PricingError::PriceSource {
                message: "provide either base_price or display_price, not both".to_string(),
            }),
            (None, None) => Err(PricingError::PriceSource {
                message: "one of base_price or display_price is required".to_string(),
            }),
        }
    }

    /// Resolve to `(original_price, display_price)`.
    fn resolve(self, engine: &PricingEngine) -> Result<(Decimal, Decimal), PricingError> {
        match self {
            PriceSource::Base(base) => {
                let display = engine.calculate_display_price(base)?;
                Ok((base, display))
            }
            PriceSource::Display(display) => {
                let original = engine.get_original_price(display)?;
                Ok((original, display))
            }
        }
    }
}

/// Result of quoting a booking
#[derive(Debug, Clone)]
pub struct BookingQuote {
    pub kind: BookingKind,
    pub original_price: Decimal,
    pub display_price: Decimal,
    /// Nights for a property stay, participants for a tour
    pub quantity: i32,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub breakdown: PriceBreakdown,
    pub pay_later_fee_label: Option<String>,
    pub formatted_total: String,
}

fn build_quote(
    engine: &PricingEngine,
    kind: BookingKind,
    source: PriceSource,
    quantity: i32,
    is_pay_later: bool,
) -> Result<BookingQuote, PricingError> {
    let (original_price, display_price) = source.resolve(engine)?;
    let breakdown =
        engine.calculate_price_breakdown(display_price, quantity, is_pay_later, kind)?;

    let pay_later_fee_label = breakdown
        .pay_at_property_fee
        .map(|_| engine.pay_later_fee_label(kind));
    let formatted_total = format_usd(breakdown.total);

    debug!(
        kind = kind.unit(),
        %display_price,
        quantity,
        total = %breakdown.total,
        "quoted booking"
    );

    Ok(BookingQuote {
        kind,
        original_price,
        display_price,
        quantity,
        check_in: None,
        check_out: None,
        breakdown,
        pay_later_fee_label,
        formatted_total,
    })
}

/// Quote a nightly property stay between two dates.
pub fn quote_property_stay(
    engine: &PricingEngine,
    source: PriceSource,
    check_in: NaiveDate,
    check_out: NaiveDate,
    pay_at_property: bool,
) -> Result<BookingQuote, PricingError> {
    let nights = nights_between(check_in, check_out)?;
    let mut quote = build_quote(engine, BookingKind::Property, source, nights, pay_at_property)?;
    quote.check_in = Some(check_in);
    quote.check_out = Some(check_out);
    Ok(quote)
}

/// Quote a per-participant tour.
pub fn quote_tour(
    engine: &PricingEngine,
    source: PriceSource,
    participants: i32,
    pay_at_tour: bool,
) -> Result<BookingQuote, PricingError> {
    build_quote(engine, BookingKind::Tour, source, participants, pay_at_tour)
}
