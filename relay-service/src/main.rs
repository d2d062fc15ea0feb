use relay_service::config::RelayConfig;
use relay_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Tracing is not up yet, so config failures go to stderr
    let config = RelayConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // Initialize tracing
    init_tracing(
        "relay-service",
        "info",
        config.observability.otlp_endpoint.as_deref(),
    );

    let model = config.gemini.model.clone();
    let static_dir = config.http.static_dir.display().to_string();
    let api_key_configured = config.has_api_key();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start relay-service: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    tracing::info!(
        port = app.port(),
        model = %model,
        static_dir = %static_dir,
        api_key_configured,
        "Kindred relay is running at http://localhost:{}",
        app.port()
    );

    app.run_until_stopped().await?;

    Ok(())
}
