use astrotunes_service::config::{AstroConfig, SERVICE_NAME};
use astrotunes_service::services::init_metrics;
use astrotunes_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AstroConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    init_metrics().map_err(|e| {
        tracing::error!("Failed to initialize metrics: {}", e);
        e
    })?;

    let app = Application::build(config).await?;
    tracing::info!("Starting {} on port {}", SERVICE_NAME, app.port());

    app.run_until_stopped().await?;

    Ok(())
}
