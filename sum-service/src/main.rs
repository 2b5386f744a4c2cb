use dotenvy::dotenv;
use service_core::observability::init_tracing;
use sum_service::config::SumConfig;
use sum_service::services::init_metrics;
use sum_service::startup::Application;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = SumConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    init_metrics()?;

    let app = Application::build(&config).await?;

    info!("Starting {} on {}", config.service_name, config.common.address());
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
