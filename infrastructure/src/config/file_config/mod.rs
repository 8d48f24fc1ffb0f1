//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod client;
mod logging;
mod output;
mod server;

pub use client::FileClientConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use server::FileServerConfig;

use advocates_domain::MAX_LIMIT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("server.host cannot be empty")]
    EmptyHost,

    #[error("client.page_size must be between 1 and {max}, got {0}", max = MAX_LIMIT)]
    InvalidPageSize(u64),

    #[error("client.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("client.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Listing API server settings
    pub server: FileServerConfig,
    /// Client settings shared by `list` and `browse`
    pub client: FileClientConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }
        if self.client.page_size == 0 || self.client.page_size > MAX_LIMIT {
            return Err(ConfigValidationError::InvalidPageSize(
                self.client.page_size,
            ));
        }
        if self.client.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.client.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        Ok(())
    }
}
