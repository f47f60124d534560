//! Playstore API Gateway - Binary Entry Point

use std::sync::Arc;

use axum::extract::Request;
use axum::ServiceExt;
use tracing_subscriber::EnvFilter;

use playstore_api::{create_app, AppState, Config, UpstreamProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = Arc::new(UpstreamProvider::new(config.upstream_url.clone()));
    let state = Arc::new(AppState::new(provider, &config.mount_prefix));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        prefix = %config.mount_prefix,
        upstream = %config.upstream_url,
        "playstore gateway listening"
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
