//! HTTP server initialization and runtime setup.
//!
//! Handles storage backend selection, state wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::ObjectStore;
use crate::infrastructure::persistence::{JsonFileStore, MemoryStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (JSON file store when `DATA_FILE` is set, memory otherwise)
/// - Axum HTTP server with graceful shutdown on SIGINT
///
/// The store is flushed once more after the server stops, so the file-backed
/// store never loses the last mutations on shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - The data file exists but cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn ObjectStore> = match &config.data_file {
        Some(path) => {
            let store = JsonFileStore::open(path).await?;
            tracing::info!("Storage: file-backed ({})", path.display());
            Arc::new(store)
        }
        None => {
            tracing::info!("Storage: in-memory");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(store.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.flush().await?;
    tracing::info!("Storage flushed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
