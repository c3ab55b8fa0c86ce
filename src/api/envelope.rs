//! Response Envelopes
//!
//! Every endpoint answers with a JSON envelope discriminated by a boolean
//! `ok` member. Success bodies carry the data under a relation-specific key
//! plus the request's `offset`/`count` echoed verbatim; failure bodies carry
//! a machine-readable `{code, message, data}` triple. The `message` values
//! are the frontend's localization keys.

use serde::Serialize;

/// Error codes emitted by the address API
pub mod codes {
    pub const FAIL_GET_ADDRESS: &str = "FAIL_GET_ADDRESS";
    pub const FAIL_GET_ADDRESS_TRANSFERS: &str = "FAIL_GET_ADDRESS_TRANSFERS";
    pub const FAIL_GET_ADDRESS_EXECUTIONS: &str = "FAIL_GET_ADDRESS_EXECUTIONS";
    pub const FAIL_GET_ADDRESS_VOTES: &str = "FAIL_GET_ADDRESS_VOTES";
    pub const FAIL_GET_SETTLE_DEPOSITS: &str = "FAIL_GET_SETTLE_DEPOSITS";
    pub const FAIL_GET_CREATE_DEPOSITS: &str = "FAIL_GET_CREATE_DEPOSITS";
}

/// Context carried with an error, identifying the queried address
#[derive(Debug, Clone, Serialize)]
pub struct ErrorData {
    pub id: String,
}

/// Machine-readable error triple
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Stable error code, one of [`codes`]
    pub code: &'static str,
    /// Frontend localization key
    pub message: &'static str,
    pub data: ErrorData,
}

/// Failure envelope: `{ok: false, error: {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct FailResponse {
    pub ok: bool,
    pub error: ErrorBody,
}

impl FailResponse {
    /// Build a failure envelope for the given address id
    pub fn new(code: &'static str, message: &'static str, id: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: ErrorBody {
                code,
                message,
                data: ErrorData { id: id.into() },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_envelope_shape() {
        let fail = FailResponse::new(
            codes::FAIL_GET_ADDRESS,
            "address.error.failGetAddress",
            "io1abc",
        );
        let json = serde_json::to_value(&fail).unwrap();

        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "FAIL_GET_ADDRESS");
        assert_eq!(json["error"]["message"], "address.error.failGetAddress");
        assert_eq!(json["error"]["data"]["id"], "io1abc");
    }
}
