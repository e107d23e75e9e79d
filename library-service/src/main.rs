//! Library catalog HTTP service
//!
//! Serves the author and book catalog over HTTP with JSON bodies, backed by
//! an in-memory store.

use std::sync::Arc;

use library_service::{
    Catalog,
    config::AppConfig,
    error::AppResult,
    http::{router::Router, server},
    tracing::tracer::Tracer,
};
use tracing::info;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::get();

    Tracer::install(config)?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or_default(),
    );

    start(config).await
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let catalog = Catalog::in_memory();
    let router = Arc::new(Router::new(&catalog));

    server::serve(config.server.http_address, router).await
}
