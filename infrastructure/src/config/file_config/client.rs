//! Client configuration from TOML (`[client]` section)

use advocates_application::BrowseParams;
use advocates_domain::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw client configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of the listing API
    pub base_url: String,
    /// Advocates requested per page
    pub page_size: u64,
    /// Request timeout in seconds (no timeout when unset)
    pub timeout_seconds: Option<u64>,
    /// Search debounce in milliseconds
    pub debounce_ms: u64,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            page_size: DEFAULT_LIMIT,
            timeout_seconds: Some(10),
            debounce_ms: 300,
        }
    }
}

impl FileClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn browse_params(&self) -> BrowseParams {
        BrowseParams::default()
            .with_page_size(self.page_size)
            .with_debounce_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_params_from_config() {
        let config = FileClientConfig {
            page_size: 5,
            debounce_ms: 50,
            ..FileClientConfig::default()
        };
        let params = config.browse_params();
        assert_eq!(params.page_size, 5);
        assert_eq!(params.debounce, Duration::from_millis(50));
    }

    #[test]
    fn test_timeout() {
        assert_eq!(
            FileClientConfig::default().timeout(),
            Some(Duration::from_secs(10))
        );
        let config = FileClientConfig {
            timeout_seconds: None,
            ..FileClientConfig::default()
        };
        assert_eq!(config.timeout(), None);
    }
}
