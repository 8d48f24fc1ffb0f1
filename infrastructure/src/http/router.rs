//! Listing API router.
//!
//! Returns a composable `Router` with the listing and health endpoints,
//! wrapped in a request-logging layer.

use super::handlers;
use advocates_application::{AdvocateRepository, ListAdvocatesUseCase};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared state for all API routes.
pub struct ApiContext<R: AdvocateRepository + 'static> {
    pub list: ListAdvocatesUseCase<R>,
}

impl<R: AdvocateRepository + 'static> Clone for ApiContext<R> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<R: AdvocateRepository + 'static> ApiContext<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            list: ListAdvocatesUseCase::new(repository),
        }
    }
}

/// Build the listing API router over `repository`.
pub fn advocates_router<R: AdvocateRepository + 'static>(repository: Arc<R>) -> Router {
    Router::new()
        .route("/api/advocates", get(handlers::list_advocates::<R>))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(ApiContext::new(repository))
        .layer(axum::middleware::from_fn(log_request))
}

/// Log method, path, status and latency of every request.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        %method,
        path = uri.path(),
        query = uri.query().unwrap_or(""),
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
