//! Infrastructure layer for advocate-directory
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the roster store, the listing API server,
//! directory gateways, and configuration file loading.

pub mod client;
pub mod config;
pub mod http;
pub mod storage;

// Re-export commonly used types
pub use client::{HttpDirectoryGateway, LocalDirectoryGateway};
pub use config::{
    ConfigLoader, ConfigValidationError, FileClientConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileServerConfig,
};
pub use http::{ApiContext, ApiError, ErrorBody, ServerError, advocates_router, serve};
pub use storage::{InMemoryAdvocateRepository, SeedError, builtin_roster, load_roster};
