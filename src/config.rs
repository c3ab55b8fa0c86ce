//! Environment-based Configuration for the Explorer Backend
//!
//! All settings are loaded from environment variables with sensible
//! per-network defaults.
//!
//! # Environment Variables
//!
//! - `EXPLORER_NETWORK` - "mainnet" or "testnet" (default: "testnet")
//! - `EXPLORER_GATEWAY_URL` - Blockchain gateway RPC endpoint URL
//! - `EXPLORER_API_PORT` - REST API port (default: 4004)
//! - `EXPLORER_GATEWAY_TIMEOUT_SECS` - Per-request gateway timeout (default: 10)
//! - `EXPLORER_LOG_LEVEL` - Logging level (debug, info, warn, error)
//! - `EXPLORER_LOG_JSON` - Set to "1" to force JSON logs (default: JSON on mainnet)

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Network environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(ConfigError::InvalidValue(
                "EXPLORER_NETWORK".to_string(),
                format!("unknown network: {}", s),
            )),
        }
    }
}

impl Network {
    /// Get the default gateway RPC endpoint for this network
    ///
    /// The gateway is normally the explorer RPC of a colocated chain node.
    pub fn default_gateway_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "http://127.0.0.1:14004",
            Network::Testnet => "http://127.0.0.1:24004",
        }
    }

    /// Whether JSON log output is the default on this network
    pub fn defaults_to_json_logs(&self) -> bool {
        matches!(self, Network::Mainnet)
    }
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Network environment
    pub network: Network,

    /// Blockchain gateway RPC endpoint
    pub gateway_url: String,

    /// REST API listen port
    pub api_port: u16,

    /// Per-request timeout applied to every gateway call
    pub gateway_timeout: Duration,

    /// Log level
    pub log_level: String,

    /// Emit JSON-formatted logs
    pub log_json: bool,
}

impl ExplorerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let network: Network = env::var("EXPLORER_NETWORK")
            .unwrap_or_else(|_| "testnet".to_string())
            .parse()?;

        let gateway_url = env::var("EXPLORER_GATEWAY_URL")
            .unwrap_or_else(|_| network.default_gateway_url().to_string());

        let api_port = parse_or_default("EXPLORER_API_PORT", 4004)?;

        let timeout_secs: u64 = parse_or_default("EXPLORER_GATEWAY_TIMEOUT_SECS", 10)?;
        let gateway_timeout = Duration::from_secs(timeout_secs);

        let log_level = env::var("EXPLORER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = match env::var("EXPLORER_LOG_JSON") {
            Ok(v) => v == "1",
            Err(_) => network.defaults_to_json_logs(),
        };

        Ok(Self {
            network,
            gateway_url,
            api_port,
            gateway_timeout,
            log_level,
            log_json,
        })
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        println!("=== Explorer Backend Configuration ===");
        println!("Network: {:?}", self.network);
        println!("Gateway: {}", self.gateway_url);
        println!("API Port: {}", self.api_port);
        println!("Gateway Timeout: {}s", self.gateway_timeout.as_secs());
        println!("Log Level: {}", self.log_level);
        println!("JSON Logs: {}", self.log_json);
        println!("======================================");
    }
}

/// Parse an env var, falling back to a default when unset
fn parse_or_default<T: FromStr>(var_name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(var_name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue(var_name.to_string(), value)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parsing() {
        assert!(matches!("mainnet".parse::<Network>(), Ok(Network::Mainnet)));
        assert!(matches!("testnet".parse::<Network>(), Ok(Network::Testnet)));
        assert!("invalid".parse::<Network>().is_err());
    }

    #[test]
    fn test_json_log_defaults() {
        assert!(Network::Mainnet.defaults_to_json_logs());
        assert!(!Network::Testnet.defaults_to_json_logs());
    }

    #[test]
    fn test_gateway_defaults_differ_per_network() {
        assert_ne!(
            Network::Mainnet.default_gateway_url(),
            Network::Testnet.default_gateway_url()
        );
    }
}
