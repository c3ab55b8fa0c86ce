//! Common Error Types for the Explorer Backend
//!
//! Provides unified error handling across all modules. Handlers never let a
//! gateway failure escape: it is rendered as an `ok: false` envelope at the
//! handler boundary. This type covers everything outside that boundary
//! (startup, configuration, listener setup).

use thiserror::Error;

use crate::api::routes::ApiError;
use crate::config::ConfigError;
use crate::gateway::GatewayError;
use crate::logging::LoggingError;

/// Root error type for the explorer backend
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging errors
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Gateway errors
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExplorerError {
    /// Get error code for log output
    pub fn error_code(&self) -> &'static str {
        match self {
            ExplorerError::Config(_) => "CONFIG_ERROR",
            ExplorerError::Logging(_) => "LOGGING_ERROR",
            ExplorerError::Gateway(_) => "GATEWAY_ERROR",
            ExplorerError::Api(_) => "API_ERROR",
            ExplorerError::Io(_) => "IO_ERROR",
        }
    }
}

/// Result type alias using ExplorerError
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ExplorerError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "port taken",
        ));
        assert_eq!(err.error_code(), "IO_ERROR");
        assert!(err.to_string().contains("port taken"));
    }
}
