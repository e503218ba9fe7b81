use serde::{Deserialize, Serialize};

/// Error body returned by the contest API.
///
/// The REST framework reports failures under `detail`; older endpoints use `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_accepts_both_keys() {
        let a: ErrorResponse = serde_json::from_str(r#"{"detail": "Not found."}"#).unwrap();
        let b: ErrorResponse = serde_json::from_str(r#"{"error": "Not found."}"#).unwrap();
        assert_eq!(a, b);
    }
}
