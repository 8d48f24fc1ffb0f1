//! Directory gateway port
//!
//! Defines how clients (the `list` command, the interactive browser) obtain
//! pages of the directory, whether over HTTP or in-process.

use advocates_domain::{Advocate, Page, PageRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Source of directory pages for a client
#[async_trait]
pub trait DirectoryGateway: Send + Sync {
    /// Fetch one page of advocates
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<Advocate>, GatewayError>;
}
