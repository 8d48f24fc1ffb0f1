//! Configuration file loading for advocate-directory
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ADVOCATES_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./advocates.toml` or `./.advocates.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/advocate-directory/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClientConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
