use finchat::api::{self, app_state::AppState};
use finchat::config::loader::ConfigLoader;
use finchat::inference::create_text_generator;
use finchat::observability::{ObservabilityState, create_observability_router, init_tracing};
use finchat::services::create_summary_service;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    init_tracing(&config.logging);

    info!("Starting {}...", config.app_name);
    info!("Configuration loaded successfully");

    let generator = create_text_generator(&config.inference)?;
    match &generator {
        Some(generator) => info!("Text generator initialized: {}", generator.name()),
        None => info!("No inference credential configured, external generation disabled"),
    }

    let observability_state = Arc::new(ObservabilityState::new(env!("CARGO_PKG_VERSION").to_string()));
    let metrics = observability_state.metrics.clone();

    let summary_service = create_summary_service(generator, metrics.clone());
    info!("Summary service initialized");

    let app_state = AppState::new(summary_service, metrics);
    info!("Application state created");

    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
