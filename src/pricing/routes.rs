//! Pricing API route handlers.
//!
//! Thin JSON wrappers over the engine; every figure is computed by
//! [`PricingEngine`](super::PricingEngine).

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppJson, Result};
use crate::AppState;

use super::calculators::BookingKind;
use super::config::PricingConfig;
use super::format::{format_price, format_usd};
use super::requests::{
    BreakdownRequest, DisplayPriceRequest, FormatPriceRequest, OriginalPriceRequest,
    PropertyQuoteRequest, TourQuoteRequest,
};
use super::responses::{
    BookingQuoteResponse, BookingTotalResponse, DisplayPriceResponse, FormatPriceResponse,
    OriginalPriceResponse, PriceBreakdownResponse,
};
use super::services::{quote_property_stay, quote_tour, PriceSource};

/// Pricing routes, mounted under `/api/pricing`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(get_config))
        .route("/display-price", post(display_price))
        .route("/original-price", post(original_price))
        .route("/breakdown", post(breakdown))
        .route("/booking-total", post(booking_total))
        .route("/format", post(format_amount))
        .route("/quotes/property", post(property_quote))
        .route("/quotes/tour", post(tour_quote))
}

async fn get_config(State(state): State<AppState>) -> Json<PricingConfig> {
    Json(state.engine.config().clone())
}

async fn display_price(
    State(state): State<AppState>,
    AppJson(req): AppJson<DisplayPriceRequest>,
) -> Result<Json<DisplayPriceResponse>> {
    let display_price = state.engine.calculate_display_price(req.base_price)?;
    Ok(Json(DisplayPriceResponse {
        base_price: req.base_price,
        display_price,
    }))
}

async fn original_price(
    State(state): State<AppState>,
    AppJson(req): AppJson<OriginalPriceRequest>,
) -> Result<Json<OriginalPriceResponse>> {
    let original_price = state.engine.get_original_price(req.display_price)?;
    Ok(Json(OriginalPriceResponse {
        display_price: req.display_price,
        original_price,
    }))
}

async fn breakdown(
    State(state): State<AppState>,
    AppJson(req): AppJson<BreakdownRequest>,
) -> Result<Json<PriceBreakdownResponse>> {
    let breakdown = state.engine.calculate_price_breakdown(
        req.display_price_per_unit,
        req.quantity,
        req.is_pay_later,
        BookingKind::from_is_tour(req.is_tour),
    )?;
    Ok(Json(breakdown.into()))
}

async fn booking_total(
    State(state): State<AppState>,
    AppJson(req): AppJson<BreakdownRequest>,
) -> Result<Json<BookingTotalResponse>> {
    let total = state.engine.calculate_booking_total(
        req.display_price_per_unit,
        req.quantity,
        req.is_pay_later,
        BookingKind::from_is_tour(req.is_tour),
    )?;
    Ok(Json(BookingTotalResponse {
        total,
        formatted_total: format_usd(total),
    }))
}

async fn format_amount(
    AppJson(req): AppJson<FormatPriceRequest>,
) -> Result<Json<FormatPriceResponse>> {
    let formatted = format_price(req.amount, &req.currency)?;
    Ok(Json(FormatPriceResponse { formatted }))
}

async fn property_quote(
    State(state): State<AppState>,
    AppJson(req): AppJson<PropertyQuoteRequest>,
) -> Result<Json<BookingQuoteResponse>> {
    let source = PriceSource::from_fields(req.base_price, req.display_price)?;
    let quote = quote_property_stay(
        &state.engine,
        source,
        req.check_in,
        req.check_out,
        req.pay_at_property,
    )?;
    Ok(Json(quote.into()))
}

async fn tour_quote(
    State(state): State<AppState>,
    AppJson(req): AppJson<TourQuoteRequest>,
) -> Result<Json<BookingQuoteResponse>> {
    let source = PriceSource::from_fields(req.base_price, req.display_price)?;
    let quote = quote_tour(&state.engine, source, req.participants, req.pay_at_tour)?;
    Ok(Json(quote.into()))
}
