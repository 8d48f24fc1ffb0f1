//! Advocate repository port
//!
//! Defines how the listing use case reads the roster. Implementations
//! (in-memory seed data, a database table, ...) live in the infrastructure
//! layer.

use advocates_domain::Advocate;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while reading the roster
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Read-only access to the advocate roster
#[async_trait]
pub trait AdvocateRepository: Send + Sync {
    /// Return at most `limit` advocates after skipping `offset`, in roster order
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<Vec<Advocate>, RepositoryError>;

    /// Total number of advocates in the roster
    async fn count(&self) -> Result<u64, RepositoryError>;
}
