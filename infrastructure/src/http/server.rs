//! Listing API server lifecycle: bind, serve, shut down gracefully.

use super::router::advocates_router;
use advocates_application::AdvocateRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Errors that can occur while running the server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serve the listing API on `addr` until `shutdown` is cancelled.
///
/// `on_bound` is called with the actual local address once the listener is
/// up (useful when binding port 0).
pub async fn serve<R, F>(
    repository: Arc<R>,
    addr: SocketAddr,
    shutdown: CancellationToken,
    on_bound: F,
) -> Result<(), ServerError>
where
    R: AdvocateRepository + 'static,
    F: FnOnce(SocketAddr),
{
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr()?;

    info!(%local_addr, "Advocate directory API listening");
    on_bound(local_addr);

    let app = advocates_router(repository);
    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            info!("Advocate directory API received shutdown signal");
        })
        .await;

    if let Err(e) = &result {
        error!("Advocate directory API error: {e}");
    }
    info!("Advocate directory API stopped");
    result.map_err(ServerError::from)
}
