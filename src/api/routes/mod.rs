//! API Routes Module
//!
//! Route handlers organized by domain:
//! - address: Address detail and relation lookups

pub mod address;

use thiserror::Error;

/// Route configuration errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unsupported route method: {0}")]
    UnsupportedMethod(String),
}

/// HTTP methods the route table supports
///
/// Anything else is a configuration mistake and is rejected at parse time
/// rather than silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
}

impl TryFrom<&str> for RouteMethod {
    type Error = ApiError;

    fn try_from(s: &str) -> Result<Self, ApiError> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(RouteMethod::Get),
            "post" => Ok(RouteMethod::Post),
            other => Err(ApiError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl std::fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteMethod::Get => write!(f, "GET"),
            RouteMethod::Post => write!(f, "POST"),
        }
    }
}

/// Static route descriptor
///
/// Drives the startup banner and keeps the served surface enumerable; the
/// handlers themselves are bound in [`address::address_router`].
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub method: RouteMethod,
    pub name: &'static str,
    pub path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_methods_parse() {
        assert_eq!(RouteMethod::try_from("get").unwrap(), RouteMethod::Get);
        assert_eq!(RouteMethod::try_from("POST").unwrap(), RouteMethod::Post);
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = RouteMethod::try_from("put").unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMethod(ref m) if m == "put"));

        assert!(RouteMethod::try_from("delete").is_err());
        assert!(RouteMethod::try_from("").is_err());
    }
}
