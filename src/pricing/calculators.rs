//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no clocks, no shared state.
//! Every monetary step rounds to whole currency units before the next step
//! consumes it, so totals match what the checkout pages have always shown.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::PricingConfig;
use super::error::PricingError;

/// Round to whole currency units, halves away from zero.
///
/// Only positive amounts reach this in practice, where it behaves as
/// round-half-up.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use booking_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5)), dec!(3));
/// assert_eq!(round_money(dec!(13.2)), dec!(13));
/// assert_eq!(round_money(dec!(34.3)), dec!(34));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn require_non_negative(field: &'static str, amount: Decimal) -> Result<Decimal, PricingError> {
    if amount < Decimal::ZERO {
        return Err(PricingError::NegativeAmount { field, amount });
    }
    Ok(amount)
}

fn checked_mul(a: Decimal, b: Decimal, operation: &'static str) -> Result<Decimal, PricingError> {
    a.checked_mul(b).ok_or(PricingError::Overflow { operation })
}

fn checked_add(a: Decimal, b: Decimal, operation: &'static str) -> Result<Decimal, PricingError> {
    a.checked_add(b).ok_or(PricingError::Overflow { operation })
}

/// What is being booked: nights at a property or participants on a tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    #[default]
    Property,
    Tour,
}

impl BookingKind {
    pub fn from_is_tour(is_tour: bool) -> Self {
        if is_tour {
            BookingKind::Tour
        } else {
            BookingKind::Property
        }
    }

    /// Unit the quantity counts ("night" or "participant").
    pub fn unit(&self) -> &'static str {
        match self {
            BookingKind::Property => "night",
            BookingKind::Tour => "participant",
        }
    }
}

/// Result of a price breakdown calculation
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Per-unit display price the breakdown was computed from
    pub price: Decimal,
    pub subtotal: Decimal,
    /// Always zero; kept so consumers reading the field keep working
    pub cleaning_fee: Decimal,
    /// Always zero; kept so consumers reading the field keep working
    pub service_fee: Decimal,
    pub taxes: Decimal,
    /// Present only for pay-at-property / pay-at-tour bookings
    pub pay_at_property_fee: Option<Decimal>,
    pub total: Decimal,
}

/// Pricing engine bound to one immutable configuration.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price shown to the customer for one night or one participant.
    ///
    /// `round(base_price × (1 + display_markup))`. The markup is never
    /// surfaced as its own line item.
    pub fn calculate_display_price(&self, base_price: Decimal) -> Result<Decimal, PricingError> {
        let base_price = require_non_negative("base_price", base_price)?;
        let marked_up = checked_mul(base_price, self.config.markup_factor(), "display price")?;
        Ok(round_money(marked_up))
    }

    /// Recover the host's base price from a display price.
    ///
    /// `round(display_price / (1 + display_markup))`. Both directions round
    /// independently, so a round trip may drift by one unit.
    pub fn get_original_price(&self, display_price: Decimal) -> Result<Decimal, PricingError> {
        let display_price = require_non_negative("display_price", display_price)?;
        let base = display_price
            .checked_div(self.config.markup_factor())
            .ok_or(PricingError::Overflow {
                operation: "original price",
            })?;
        Ok(round_money(base))
    }

    /// Full breakdown for `quantity` nights or participants.
    ///
    /// Order matters: taxes round on the subtotal, then the pay-later fee
    /// rounds on subtotal + taxes.
    ///
    /// `kind` does not change any figure here; property and tour bookings
    /// share the same formulas. It is unclear whether tours were meant to get
    /// their own fee rate, so the parameter stays unwired.
    pub fn calculate_price_breakdown(
        &self,
        display_price_per_unit: Decimal,
        quantity: i32,
        is_pay_later: bool,
        kind: BookingKind,
    ) -> Result<PriceBreakdown, PricingError> {
        let price = require_non_negative("display_price_per_unit", display_price_per_unit)?;
        if quantity < 0 {
            return Err(PricingError::NegativeQuantity { quantity });
        }

        let subtotal = checked_mul(price, Decimal::from(quantity), "subtotal")?;
        let taxes = round_money(checked_mul(subtotal, self.config.tax_rate, "taxes")?);
        let mut total = checked_add(subtotal, taxes, "total")?;

        let pay_at_property_fee = if is_pay_later {
            let fee = round_money(checked_mul(
                total,
                self.config.pay_at_property_fee_rate,
                "pay later fee",
            )?);
            total = checked_add(total, fee, "total")?;
            Some(fee)
        } else {
            None
        };

        tracing::trace!(
            kind = kind.unit(),
            %price,
            quantity,
            %subtotal,
            %taxes,
            %total,
            "computed price breakdown"
        );

        Ok(PriceBreakdown {
            price,
            subtotal,
            cleaning_fee: Decimal::ZERO,
            service_fee: Decimal::ZERO,
            taxes,
            pay_at_property_fee,
            total,
        })
    }

    /// Grand total only, e.g. the amount submitted to the payment provider.
    pub fn calculate_booking_total(
        &self,
        display_price_per_unit: Decimal,
        quantity: i32,
        is_pay_later: bool,
        kind: BookingKind,
    ) -> Result<Decimal, PricingError> {
        self.calculate_price_breakdown(display_price_per_unit, quantity, is_pay_later, kind)
            .map(|breakdown| breakdown.total)
    }

    /// Checkout label for the pay-later fee, e.g. "Pay at tour fee (10%)".
    pub fn pay_later_fee_label(&self, kind: BookingKind) -> String {
        let place = match kind {
            BookingKind::Property => "property",
            BookingKind::Tour => "tour",
        };
        format!(
            "Pay at {} fee ({}%)",
            place,
            self.config.pay_later_fee_percent()
        )
    }
}
