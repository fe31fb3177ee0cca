//! Runtime configuration loaded from the environment.

use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;

use crate::pricing::PricingConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub log_json: bool,
    pub pricing: PricingConfig,
}

impl Config {
    /// Read configuration, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; used by `from_env` and tests.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .context("Invalid LISTEN_ADDR")?;

        let cors_allow = lookup("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_json = lookup("LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let defaults = PricingConfig::default();
        let rate = |key: &str, default: Decimal| -> anyhow::Result<Decimal> {
            match lookup(key) {
                Some(raw) => Decimal::from_str(raw.trim())
                    .with_context(|| format!("Invalid {}: '{}'", key, raw)),
                None => Ok(default),
            }
        };

        let pricing = PricingConfig::new(
            rate("PRICING_DISPLAY_MARKUP", defaults.display_markup)?,
            rate("PRICING_TAX_RATE", defaults.tax_rate)?,
            rate("PRICING_PAY_LATER_FEE_RATE", defaults.pay_at_property_fee_rate)?,
            defaults.cleaning_fee,
            defaults.service_fee,
        )?;

        Ok(Self {
            listen_addr,
            cors_allow,
            log_json,
            pricing,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_allow: vec!["*".to_string()],
            log_json: false,
            pricing: PricingConfig::default(),
        }
    }
}
