//! Application layer for advocate-directory
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BrowseParams;
pub use ports::{
    advocate_repository::{AdvocateRepository, RepositoryError},
    directory_gateway::{DirectoryGateway, GatewayError},
};
pub use use_cases::browse_directory::{BrowseDirectoryUseCase, BrowseSession, LoadTicket};
pub use use_cases::list_advocates::{
    FETCH_FAILED_MESSAGE, ListAdvocatesError, ListAdvocatesUseCase,
};
