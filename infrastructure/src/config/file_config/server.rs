//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::io;
use std::net::SocketAddr;
use tracing::debug;

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind: an IP literal or a resolvable hostname
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// JSON roster to serve instead of the built-in one
    pub seed: Option<String>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            seed: None,
        }
    }
}

impl FileServerConfig {
    /// Resolve `host:port` to the address to bind.
    ///
    /// Hostnames go through the system resolver; the first address wins.
    pub async fn resolve(&self) -> io::Result<SocketAddr> {
        let addr = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no address found for host {}", self.host),
                )
            })?;
        debug!(host = %self.host, %addr, "Resolved server address");
        Ok(addr)
    }
}
