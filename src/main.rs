use booking_pricing::{app_router, config::Config, init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_json);

    tracing::info!(
        display_markup = %config.pricing.display_markup,
        tax_rate = %config.pricing.tax_rate,
        pay_later_fee_rate = %config.pricing.pay_at_property_fee_rate,
        "Pricing configuration loaded"
    );

    let state = AppState::new(&config);
    let router = app_router(state, &config);

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
