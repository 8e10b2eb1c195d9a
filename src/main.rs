use product_store::config::{AppConfig, ConfigService};
use product_store::lifecycle::shutdown_signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("🚀 Starting product store...");

    let config = AppConfig::from_service(&ConfigService::from_env())?;
    let addr = config.bind_address();

    let app = product_store::bootstrap(config).await?;
    let router = product_store::build_router(app.container())?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("✅ Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("🛑 Initiating graceful shutdown...");
        })
        .await?;

    if let Err(e) = app.shutdown().await {
        tracing::error!("Error during shutdown: {}", e);
    }
    tracing::info!("👋 Server stopped");
    Ok(())
}
