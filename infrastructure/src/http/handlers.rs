//! Endpoint handlers.

use super::error::ApiError;
use super::router::ApiContext;
use advocates_application::AdvocateRepository;
use advocates_domain::{Advocate, Page, PageRequest, parse_int_param};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::Uri;
use serde_json::{Value, json};

/// Raw `?page=&limit=` parameters.
///
/// Kept as strings so that malformed values fall back to the defaults
/// instead of being rejected.
#[derive(Debug, Default)]
pub struct AdvocatesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl AdvocatesQuery {
    /// Pick `page` and `limit` out of the query pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "limit" if query.limit.is_none() => query.limit = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn to_request(&self) -> PageRequest {
        PageRequest::from_raw(
            self.page.as_deref().and_then(parse_int_param),
            self.limit.as_deref().and_then(parse_int_param),
        )
    }
}

/// `GET /api/advocates` — one page of the roster.
pub async fn list_advocates<R: AdvocateRepository + 'static>(
    State(ctx): State<ApiContext<R>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Page<Advocate>>, ApiError> {
    let request = AdvocatesQuery::from_pairs(pairs).to_request();
    let page = ctx.list.execute(request).await?;
    Ok(Json(page))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
