//! Type definitions for the webserver
//!
//! Configuration and response shapes that are not service traits and not
//! shared with the orchestrator.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use shared::FileBundle;

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub output_dir: PathBuf,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
            output_dir: PathBuf::from("./generated"),
            max_sessions: 256,
        }
    }
}

/// Response body for `GET /files/recent`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentGeneration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub files: FileBundle,
    pub written: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.output_dir, PathBuf::from("./generated"));
        assert_eq!(config.max_sessions, 256);
    }

    #[test]
    fn test_empty_recent_generation_shape() {
        let value = serde_json::to_value(RecentGeneration::default()).unwrap();
        assert!(value.get("prompt").is_none());
        assert_eq!(value["files"], serde_json::json!({}));
    }
}
