//! API error type with JSON responses.

use advocates_application::{FETCH_FAILED_MESSAGE, ListAdvocatesError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    ListFailed(#[from] ListAdvocatesError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::ListFailed(detail) => {
                tracing::error!(%detail, "Error fetching advocates");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    FETCH_FAILED_MESSAGE.to_string(),
                )
            }
            ApiError::NotFound(path) => (StatusCode::NOT_FOUND, format!("No route for {path}")),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advocates_application::RepositoryError;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn list_failure_returns_500_with_generic_message() {
        let err = ApiError::from(ListAdvocatesError::FetchFailed(
            RepositoryError::QueryFailed("relation \"advocates\" does not exist".into()),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        // Internal details stay in the logs
        assert_eq!(json, serde_json::json!({"error": "Failed to fetch advocates"}));
    }

    #[tokio::test]
    async fn not_found_returns_404() {
        let response = ApiError::NotFound("/api/nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.error, "No route for /api/nope");
    }
}
