use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vizdash::{DashboardEngine, HttpServer, InMemorySource, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerArgs::parse().into_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Vizdash v{}", vizdash::version());

    let source = InMemorySource::from_json_file(&config.data_path)
        .with_context(|| format!("failed to load dataset from {}", config.data_path.display()))?;

    let engine = DashboardEngine::new(Arc::new(source));
    engine.warm_baseline().await.context("failed to compute baseline metrics")?;

    let server = HttpServer::new(config, engine);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
