mod config;
mod errors;
mod jobs;
mod models;
mod pages;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{BackendKind, Config};
use crate::jobs::backend::{HttpJobBackend, JobBackend};
use crate::jobs::memory::MemoryJobBackend;
use crate::jobs::store::JobStore;
use crate::routes::build_router;
use crate::state::AppState;

/// Owner of the demo postings served by the in-memory backend.
const DEMO_MENTOR_ID: &str = "demo-mentor";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting M-Matcher web v{}", env!("CARGO_PKG_VERSION"));

    let backend: Arc<dyn JobBackend> = match &config.backend {
        BackendKind::Http { base_url } => {
            let backend = HttpJobBackend::new(
                base_url,
                Duration::from_secs(config.backend_timeout_secs),
            )?;
            info!("Job backend: {base_url}");
            Arc::new(backend)
        }
        BackendKind::Memory => {
            warn!("Using in-memory job backend; demo postings belong to '{DEMO_MENTOR_ID}'");
            Arc::new(MemoryJobBackend::with_demo_data(DEMO_MENTOR_ID))
        }
    };

    let state = AppState {
        store: Arc::new(JobStore::new(backend)),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received ctrl+c, shutting down");
}
