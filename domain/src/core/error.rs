//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(u64),

    #[error("Invalid limit: {0} (must be between 1 and {max})", max = crate::MAX_LIMIT)]
    InvalidLimit(u64),
}
