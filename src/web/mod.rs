//! HTTP endpoint exposing the current snapshot as JSON.

pub mod config;
pub mod handlers;
pub mod router;

// Re-export commonly used items
pub use config::WebConfig;
pub use router::create_app;

use crate::error::{Result, SystemError};
use crate::metrics::SnapshotStore;
use tokio::net::TcpListener;
use tracing::info;

/// Bind the listener described by `config`.
///
/// Failure here is fatal for the binary: there is no retry.
pub async fn bind_listener(config: &WebConfig) -> Result<TcpListener> {
    let addr = config.bind_address();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| SystemError::web_server_error(format!("Failed to bind to {}: {}", addr, e)))
}

/// Serve the snapshot endpoint on an already bound listener.
pub async fn serve(listener: TcpListener, store: SnapshotStore) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Serving host metrics on http://{}/", addr);
    }

    axum::serve(listener, create_app(store))
        .await
        .map_err(|e| SystemError::web_server_error(format!("Server error: {}", e)))?;

    Ok(())
}

/// Bind according to `config` and serve until the process exits.
pub async fn start_web_server(config: WebConfig, store: SnapshotStore) -> Result<()> {
    let listener = bind_listener(&config).await?;
    serve(listener, store).await
}
