//! Whole-unit currency formatting for checkout display.
//!
//! Amounts are shown without fractional digits, grouped by thousands, with
//! the en-US symbol for the currency.

use rust_decimal::Decimal;

use super::calculators::round_money;
use super::error::PricingError;

pub const DEFAULT_CURRENCY: &str = "USD";

/// en-US currency symbols. Codes not listed render as "XYZ 1,234".
const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "CN¥"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("ILS", "₪"),
    ("VND", "₫"),
    ("PHP", "₱"),
    ("MXN", "MX$"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("NZD", "NZ$"),
    ("HKD", "HK$"),
    ("BRL", "R$"),
    ("TWD", "NT$"),
];

fn symbol_for(code: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
}

/// Insert a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render `amount` in whole units for an already validated, upper-case code.
fn render(amount: Decimal, code: &str) -> String {
    let rounded = round_money(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let grouped = group_thousands(&rounded.abs().trunc().normalize().to_string());
    match symbol_for(code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, grouped),
        None => format!("{}{}\u{a0}{}", sign, code, grouped),
    }
}

/// Format an amount for display with no fractional digits.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use booking_pricing::pricing::format_price;
///
/// assert_eq!(format_price(dec!(1234), "USD").unwrap(), "$1,234");
/// assert_eq!(format_price(dec!(99.5), "EUR").unwrap(), "€100");
/// ```
pub fn format_price(amount: Decimal, currency: &str) -> Result<String, PricingError> {
    let code = currency.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PricingError::UnsupportedCurrency {
            code: currency.to_string(),
        });
    }

    Ok(render(amount, &code))
}

/// Format in the default currency (USD).
pub fn format_usd(amount: Decimal) -> String {
    render(amount, DEFAULT_CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_usd_no_decimals() {
        assert_eq!(format_price(dec!(1234), "USD").unwrap(), "$1,234");
        assert_eq!(format_price(dec!(0), "USD").unwrap(), "$0");
        assert_eq!(format_price(dec!(999), "USD").unwrap(), "$999");
        assert_eq!(format_price(dec!(1000000), "USD").unwrap(), "$1,000,000");
    }

    #[test]
    fn test_format_rounds_fractions() {
        assert_eq!(format_price(dec!(1234.49), "USD").unwrap(), "$1,234");
        assert_eq!(format_price(dec!(1234.5), "USD").unwrap(), "$1,235");
        assert_eq!(format_price(dec!(999.99), "USD").unwrap(), "$1,000");
        assert_eq!(format_price(dec!(154.50), "USD").unwrap(), "$155");
    }

    #[test]
    fn test_format_other_currencies() {
        assert_eq!(format_price(dec!(2500), "EUR").unwrap(), "€2,500");
        assert_eq!(format_price(dec!(2500), "gbp").unwrap(), "£2,500");
        assert_eq!(format_price(dec!(12000), "MXN").unwrap(), "MX$12,000");
        assert_eq!(format_price(dec!(12000), "CHF").unwrap(), "CHF\u{a0}12,000");
    }

    #[test]
    fn test_format_negative_amounts() {
        assert_eq!(format_price(dec!(-1234), "USD").unwrap(), "-$1,234");
        assert_eq!(format_price(dec!(-0.4), "USD").unwrap(), "$0");
    }

    #[test]
    fn test_format_rejects_malformed_codes() {
        for code in ["", "US", "USDX", "U$D"] {
            assert_eq!(
                format_price(dec!(10), code),
                Err(PricingError::UnsupportedCurrency {
                    code: code.to_string()
                })
            );
        }
    }

    #[test]
    fn test_format_usd_shorthand() {
        assert_eq!(format_usd(dec!(377)), "$377");
        assert_eq!(format_usd(dec!(12345.6)), "$12,346");
        for amount in [dec!(0), dec!(1234), dec!(-1234), dec!(-0.4), dec!(999.5)] {
            assert_eq!(
                format_usd(amount),
                format_price(amount, DEFAULT_CURRENCY).unwrap()
            );
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
