use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chain: ChainConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// e.g. "pacific-1" for mainnet, "atlantic-2" for testnet
    pub chain_id: String,
}

/// Endpoints and connection policy shared by the gRPC and REST clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// gRPC endpoint URL (e.g., "https://grpc.sei-apis.com:443")
    pub grpc_endpoint: String,
    /// REST (gRPC-gateway) base URL
    pub rest_endpoint: String,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Maximum retry attempts
    pub max_retries: u32,
    /// Use the deprecated `/sei-protocol/sei-chain/oracle/...` REST routes
    #[serde(default)]
    pub legacy_paths: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            grpc_endpoint: "https://grpc.sei-apis.com:443".to_string(),
            rest_endpoint: "https://rest.sei-apis.com".to_string(),
            connection_timeout: 10,
            request_timeout: 30,
            max_retries: 3,
            legacy_paths: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chain: ChainConfig {
                chain_id: "pacific-1".to_string(),
            },
            client: ClientConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("sei_proto_config_{}.toml", std::process::id()));
        let mut config = Config::default();
        config.client.legacy_paths = true;
        config.client.max_retries = 5;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.chain.chain_id, "pacific-1");
        assert!(loaded.client.legacy_paths);
        assert_eq!(loaded.client.max_retries, 5);
    }

    #[test]
    fn test_legacy_paths_defaults_off() {
        let toml = r#"
            [chain]
            chain_id = "atlantic-2"

            [client]
            grpc_endpoint = "http://localhost:9090"
            rest_endpoint = "http://localhost:1317"
            connection_timeout = 5
            request_timeout = 10
            max_retries = 0
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.client.legacy_paths);
        assert_eq!(config.client.rest_endpoint, "http://localhost:1317");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/sei_proto.toml").is_err());
    }
}
