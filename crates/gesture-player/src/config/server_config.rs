use crate::config::{default_enable_cors, default_host, default_max_upload_bytes, default_port};

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin requests from browser clients.
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
