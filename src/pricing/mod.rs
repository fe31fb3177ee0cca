//! Pricing engine module.
//!
//! Turns a host's base price into the customer-facing total for property
//! stays and tours, and exposes the calculations over HTTP/JSON.

pub mod calculators;
pub mod config;
pub mod error;
pub mod format;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod stays;

// Re-export commonly used items
pub use calculators::{round_money, BookingKind, PriceBreakdown, PricingEngine};
pub use config::PricingConfig;
pub use error::PricingError;
pub use format::{format_price, format_usd, DEFAULT_CURRENCY};
pub use routes::router;
pub use services::{quote_property_stay, quote_tour, BookingQuote, PriceSource};
pub use stays::nights_between;
