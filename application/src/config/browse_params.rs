//! Parameters for browsing the directory from a client.

use advocates_domain::{DEFAULT_LIMIT, DomainError, PageRequest};
use std::time::Duration;

/// Default delay between the last keystroke and re-filtering
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Controls how a client pages through the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseParams {
    /// Advocates requested per page
    pub page_size: u64,
    /// Quiet period after typing before the search is applied
    pub debounce: Duration,
}

impl Default for BrowseParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_LIMIT,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl BrowseParams {
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_debounce_millis(mut self, millis: u64) -> Self {
        self.debounce = Duration::from_millis(millis);
        self
    }

    /// Build the request for `page` with the configured page size.
    pub fn request(&self, page: u64) -> Result<PageRequest, DomainError> {
        PageRequest::new(page, self.page_size)
    }
}
