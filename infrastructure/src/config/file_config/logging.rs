//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily rolling log files; stderr only when unset
    pub directory: Option<String>,
}

impl FileLoggingConfig {
    pub fn directory_path(&self) -> Option<PathBuf> {
        self.directory.as_ref().map(PathBuf::from)
    }
}
