//! Vote Records

use serde::{Deserialize, Serialize};

/// A vote cast by an address
///
/// `out` marks a vote that has been superseded ("closed") by a later vote
/// within the returned window. The gateway omits it; the closing pass in
/// the voters handler sets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    /// Action hash
    pub id: String,
    pub voter: String,
    pub votee: String,
    /// Unix timestamp (seconds)
    pub timestamp: u64,
    #[serde(default)]
    pub block_id: Option<String>,
    /// Superseded marker, set by the closing pass
    #[serde(default)]
    pub out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_defaults_false_when_gateway_omits_it() {
        let vote: Vote = serde_json::from_str(
            r#"{"id":"v1","voter":"io1voter","votee":"io1votee","timestamp":1546300800}"#,
        )
        .unwrap();

        assert!(!vote.out);
        assert_eq!(vote.block_id, None);
    }
}
