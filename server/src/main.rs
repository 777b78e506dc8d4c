//! Static host for the built client bundle.
//!
//! Reads `.env` and the process environment into a `ServerConfig`, installs
//! the tracing subscriber, then serves `SITE_DIR` until Ctrl-C. Unknown paths
//! fall back to `index.html` so client-side routes survive a reload.

mod config;
mod error;
mod routes;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    let config = ServerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    if !config.site_dir.is_dir() {
        return Err(ServerError::MissingSite(config.site_dir.display().to_string()));
    }

    let app = routes::app(&config);
    let listener = TcpListener::bind(config.addr()).await?;

    tracing::info!(addr = %config.addr(), site_dir = %config.site_dir.display(), "odpoczniesz-tu listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
