use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use ad_core::catalog::default_catalog;
use ad_core::service::{bind, log_filter, serve_with_shutdown, AdService, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    info!("AdService starting.");

    let config = ServiceConfig::from_env().context("loading service config")?;
    info!(config = %serde_json::to_string(&config)?, "config loaded");

    let catalog = Arc::new(default_catalog());
    info!(
        version = catalog.version(),
        ads = catalog.len(),
        categories = catalog.categories().len(),
        "catalog built"
    );

    let listener = bind(&config)
        .await
        .with_context(|| format!("binding {}", config.bind_addr()))?;
    serve_with_shutdown(listener, AdService::new(catalog), shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received shutdown signal"),
        Err(err) => {
            warn!("cannot listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
