//! Page request value object

use crate::core::error::DomainError;
use serde::Serialize;

/// Page number used when the client does not ask for one
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the client does not ask for one
pub const DEFAULT_LIMIT: u64 = 20;

/// Largest page size the listing endpoint will serve
pub const MAX_LIMIT: u64 = 100;

/// A bounded request for one page of the roster (Value Object)
///
/// `page` is 1-based and always at least 1; `limit` is always within
/// `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Strict constructor for values that come from our own code or the CLI.
    pub fn new(page: u64, limit: u64) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::InvalidPage(page));
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(DomainError::InvalidLimit(limit));
        }
        Ok(Self { page, limit })
    }

    /// Lenient constructor for raw query parameters.
    ///
    /// A missing or zero value falls back to the default; anything else is
    /// floored (page) or clamped (limit) into range. Never fails.
    pub fn from_raw(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            None | Some(0) => DEFAULT_PAGE,
            Some(p) => p.max(1) as u64,
        };
        let limit = match limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(l) => l.clamp(1, MAX_LIMIT as i64) as u64,
        };
        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of records to skip before this page
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Same page size, different page (floored at 1)
    pub fn with_page(self, page: u64) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}
