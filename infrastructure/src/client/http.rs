//! HTTP client for the listing API.

use crate::http::ErrorBody;
use advocates_application::{DirectoryGateway, GatewayError};
use advocates_domain::{Advocate, Page, PageRequest, PaginationMetadata};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const LISTING_PATH: &str = "/api/advocates";

/// Fetches pages from `GET {base_url}/api/advocates`
#[derive(Debug, Clone)]
pub struct HttpDirectoryGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDirectoryGateway {
    /// Create a gateway for the API at `base_url`.
    ///
    /// `timeout` bounds each whole request; `None` means no limit.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), LISTING_PATH),
        })
    }

    /// Full URL of the listing endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Connection(e.to_string())
    }
}

#[async_trait]
impl DirectoryGateway for HttpDirectoryGateway {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<Advocate>, GatewayError> {
        debug!(
            endpoint = %self.endpoint,
            page = request.page(),
            limit = request.limit(),
            "Fetching advocates"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("page", request.page()), ("limit", request.limit())])
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_send_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown")
                        .to_string()
                });
            warn!(status = status.as_u16(), %message, "Listing API returned an error");
            return Err(GatewayError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let page: Page<Advocate> =
            serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;

        // Derived fields are recomputed rather than trusted
        let received = page.pagination;
        let pagination = PaginationMetadata::new(received.page, received.limit, received.total);
        if pagination != received {
            warn!(
                total_pages = received.total_pages,
                expected = pagination.total_pages,
                "Listing API sent inconsistent pagination"
            );
        }
        Ok(Page::new(page.data, pagination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::advocates_router;
    use crate::storage::InMemoryAdvocateRepository;
    use advocates_application::{AdvocateRepository, RepositoryError};
    use axum::Router;
    use axum::routing::get;
    use std::net::SocketAddr;
    use std::sync::Arc;

    async fn spawn(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn roster(n: usize) -> Arc<InMemoryAdvocateRepository> {
        Arc::new(InMemoryAdvocateRepository::new(
            (1..=n)
                .map(|i| Advocate::new(format!("First{i}"), "Last", "Austin", "MD").with_id(i as i64))
                .collect(),
        ))
    }

    struct BrokenRepository;

    #[async_trait]
    impl AdvocateRepository for BrokenRepository {
        async fn fetch_page(&self, _: u64, _: u64) -> Result<Vec<Advocate>, RepositoryError> {
            Err(RepositoryError::QueryFailed("boom".into()))
        }

        async fn count(&self) -> Result<u64, RepositoryError> {
            Err(RepositoryError::QueryFailed("boom".into()))
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = HttpDirectoryGateway::new("http://localhost:3000/", None).unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:3000/api/advocates");
    }

    #[tokio::test]
    async fn test_fetches_requested_page() {
        let addr = spawn(advocates_router(roster(12))).await;
        let gateway =
            HttpDirectoryGateway::new(&format!("http://{addr}"), Some(Duration::from_secs(5)))
                .unwrap();

        let page = gateway
            .fetch_page(PageRequest::new(2, 5).unwrap())
            .await
            .unwrap();

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.data[0].first_name, "First6");
        assert_eq!(page.pagination.total, 12);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
        assert!(page.pagination.has_previous_page);
    }

    #[tokio::test]
    async fn test_server_error_carries_message() {
        let addr = spawn(advocates_router(Arc::new(BrokenRepository))).await;
        let gateway = HttpDirectoryGateway::new(&format!("http://{addr}"), None).unwrap();

        let err = gateway.fetch_page(PageRequest::default()).await.unwrap_err();
        match err {
            GatewayError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to fetch advocates");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let app = Router::new().route("/api/advocates", get(|| async { "not json" }));
        let addr = spawn(app).await;
        let gateway = HttpDirectoryGateway::new(&format!("http://{addr}"), None).unwrap();

        let err = gateway.fetch_page(PageRequest::default()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_inconsistent_pagination_is_recomputed() {
        let body = r#"{"data":[],"pagination":{"page":2,"limit":20,"total":45,"totalPages":18446744073709551615,"hasNextPage":false,"hasPreviousPage":false}}"#;
        let app = Router::new().route(
            "/api/advocates",
            get(move || async move {
                ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        let addr = spawn(app).await;
        let gateway = HttpDirectoryGateway::new(&format!("http://{addr}"), None).unwrap();

        let page = gateway.fetch_page(PageRequest::default()).await.unwrap();
        assert_eq!(page.pagination, PaginationMetadata::new(2, 20, 45));
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
        assert!(page.pagination.has_previous_page);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let gateway = HttpDirectoryGateway::new(&format!("http://{addr}"), None).unwrap();

        let err = gateway.fetch_page(PageRequest::default()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Connection(_)));
    }
}
