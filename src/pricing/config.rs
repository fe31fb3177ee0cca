//! Rates and fixed fees applied by the pricing engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::PricingError;

/// Immutable pricing configuration.
///
/// Built once at startup and handed to [`PricingEngine`](super::PricingEngine).
/// Tests construct their own instances to override rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingConfig {
    /// Hidden markup folded into the display price (0.10 = 10%).
    #[serde(with = "rust_decimal::serde::str")]
    pub display_markup: Decimal,
    /// Visible tax charged on the subtotal (0.04 = 4%).
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    /// Convenience fee on subtotal + taxes when paying at the property or tour.
    #[serde(with = "rust_decimal::serde::str")]
    pub pay_at_property_fee_rate: Decimal,
    /// Reserved. Must stay zero; breakdowns always report zero.
    #[serde(with = "rust_decimal::serde::str")]
    pub cleaning_fee: Decimal,
    /// Reserved. Must stay zero; breakdowns always report zero.
    #[serde(with = "rust_decimal::serde::str")]
    pub service_fee: Decimal,
}

impl PricingConfig {
    /// Build a config, rejecting negative rates and non-zero reserved fees.
    pub fn new(
        display_markup: Decimal,
        tax_rate: Decimal,
        pay_at_property_fee_rate: Decimal,
        cleaning_fee: Decimal,
        service_fee: Decimal,
    ) -> Result<Self, PricingError> {
        let config = Self {
            display_markup,
            tax_rate,
            pay_at_property_fee_rate,
            cleaning_fee,
            service_fee,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        let rates = [
            ("display_markup", self.display_markup),
            ("tax_rate", self.tax_rate),
            ("pay_at_property_fee_rate", self.pay_at_property_fee_rate),
        ];
        let reserved = [
            ("cleaning_fee", self.cleaning_fee),
            ("service_fee", self.service_fee),
        ];

        let mut errors: Vec<String> = rates
            .iter()
            .filter(|(_, value)| value.is_sign_negative() && !value.is_zero())
            .map(|(name, value)| format!("{} must not be negative (got {})", name, value))
            .collect();
        errors.extend(
            reserved
                .iter()
                .filter(|(_, value)| !value.is_zero())
                .map(|(name, value)| format!("{} is reserved and must be 0 (got {})", name, value)),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PricingError::InvalidConfig {
                message: errors.join("; "),
            })
        }
    }

    /// Multiplier turning a base price into a display price.
    pub fn markup_factor(&self) -> Decimal {
        Decimal::ONE + self.display_markup
    }

    /// Pay-later fee rate as a whole percentage, e.g. `10` for 0.10.
    pub fn pay_later_fee_percent(&self) -> Decimal {
        (self.pay_at_property_fee_rate * dec!(100)).normalize()
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            display_markup: dec!(0.10),
            tax_rate: dec!(0.04),
            pay_at_property_fee_rate: dec!(0.10),
            cleaning_fee: Decimal::ZERO,
            service_fee: Decimal::ZERO,
        }
    }
}
