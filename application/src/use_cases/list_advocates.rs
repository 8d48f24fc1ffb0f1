//! List Advocates use case
//!
//! Serves one page of the roster together with its pagination metadata.
//! This is the logic behind `GET /api/advocates`.

use crate::ports::advocate_repository::{AdvocateRepository, RepositoryError};
use advocates_domain::{Advocate, Page, PageRequest, PaginationMetadata};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Message shown to users whenever a page cannot be produced.
///
/// Repository details are logged, never surfaced.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch advocates";

/// Errors that can occur while listing advocates
#[derive(Error, Debug)]
pub enum ListAdvocatesError {
    #[error("Failed to fetch advocates: {0}")]
    FetchFailed(#[from] RepositoryError),
}

impl ListAdvocatesError {
    /// The generic message safe to show to end users
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Use case for reading a page of the roster
pub struct ListAdvocatesUseCase<R: AdvocateRepository + 'static> {
    repository: Arc<R>,
}

impl<R: AdvocateRepository + 'static> Clone for ListAdvocatesUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: AdvocateRepository + 'static> ListAdvocatesUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetch the slice at `request.offset()` and count the roster.
    pub async fn execute(
        &self,
        request: PageRequest,
    ) -> Result<Page<Advocate>, ListAdvocatesError> {
        debug!(
            page = request.page(),
            limit = request.limit(),
            offset = request.offset(),
            "Listing advocates"
        );

        let data = self
            .repository
            .fetch_page(request.offset(), request.limit())
            .await
            .inspect_err(|e| error!("Error fetching advocates: {}", e))?;

        let total = self
            .repository
            .count()
            .await
            .inspect_err(|e| error!("Error counting advocates: {}", e))?;

        let pagination = PaginationMetadata::for_request(&request, total);
        debug!(
            returned = data.len(),
            total,
            total_pages = pagination.total_pages,
            "Listed advocates"
        );

        Ok(Page::new(data, pagination))
    }
}
