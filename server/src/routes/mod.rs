//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server hosts the prebuilt client bundle. Any path that is not a file
//! in the bundle is answered with `index.html` so the client router can
//! resolve `/galeria`, `/atrakcje` and friends, including on a hard reload.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full application router: health probe plus the static site with SPA fallback.
pub fn app(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_html()));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
