//! Booking pricing service.
//!
//! Computes display prices, breakdowns and totals for property stays and
//! tours, and serves them to the storefront as JSON.

pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::error::AppError;
use crate::pricing::responses::HealthResponse;
use crate::pricing::PricingEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PricingEngine>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: Arc::new(PricingEngine::new(config.pricing.clone())),
        }
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router.
pub fn app_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .fallback(|| async { AppError::NotFound })
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.cors_allow))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
