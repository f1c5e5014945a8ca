mod api;
mod app_config;
mod cli;
mod router;
mod state;

use tracing::info;

async fn serve(config: &suggest_core::Config) -> anyhow::Result<()> {
    config.validate()?;
    config.log_summary();

    let state = app_config::build_app_state(config)?;
    let app = router::build_router(state, &config.server.cors_origin);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let config = app_config::load_config();
    let args: Vec<String> = std::env::args().collect();

    if cli::dispatch(&config, &args)? {
        return Ok(());
    }
    serve(&config).await
}
