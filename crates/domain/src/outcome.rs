//! Test outcome types
//!
//! The proxy reply decoded into an explicit tagged union, replacing the
//! original's duck-typed checks of a boolean `success` field.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The normalized result of one proxied test request.
///
/// `Failure` is an application-level failure reported by the proxy in a
/// well-formed reply. Failures of the proxy exchange itself never reach
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireResult", into = "WireResult")]
pub enum TestResult {
    /// The proxy reached the tested endpoint and captured its response.
    Success {
        /// HTTP status code returned by the tested endpoint.
        status_code: u16,
        /// Response headers, when the proxy captured them.
        headers: Option<HashMap<String, String>>,
        /// Raw response body text.
        body: String,
    },

    /// The proxy could not complete the outbound call.
    Failure {
        /// Human-readable error reported by the proxy.
        error: String,
    },
}

impl TestResult {
    /// Creates a failure carrying the given error text.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// Returns true for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Wire form of `TestResult`, discriminated by the boolean `success` field.
///
/// Missing optional members decode as absent or empty rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    headers: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<WireResult> for TestResult {
    fn from(wire: WireResult) -> Self {
        if wire.success {
            Self::Success {
                status_code: wire.status_code.unwrap_or_default(),
                headers: wire.headers,
                body: wire.body.unwrap_or_default(),
            }
        } else {
            Self::Failure {
                error: wire.error.unwrap_or_default(),
            }
        }
    }
}

impl From<TestResult> for WireResult {
    fn from(result: TestResult) -> Self {
        match result {
            TestResult::Success {
                status_code,
                headers,
                body,
            } => Self {
                success: true,
                status_code: Some(status_code),
                headers,
                body: Some(body),
                error: None,
            },
            TestResult::Failure { error } => Self {
                success: false,
                status_code: None,
                headers: None,
                body: None,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_success_reply() {
        let result: TestResult = serde_json::from_value(json!({
            "success": true,
            "statusCode": 200,
            "headers": {"content-type": "application/json"},
            "body": "{\"ok\":true}"
        }))
        .unwrap();

        assert_eq!(
            result,
            TestResult::Success {
                status_code: 200,
                headers: Some(HashMap::from([(
                    "content-type".to_string(),
                    "application/json".to_string()
                )])),
                body: "{\"ok\":true}".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_success_without_headers() {
        let result: TestResult = serde_json::from_value(json!({
            "success": true,
            "statusCode": 204,
            "body": ""
        }))
        .unwrap();

        assert!(result.is_success());
        if let TestResult::Success { headers, .. } = result {
            assert_eq!(headers, None);
        }
    }

    #[test]
    fn test_decode_failure_reply() {
        let result: TestResult = serde_json::from_value(json!({
            "success": false,
            "error": "boom"
        }))
        .unwrap();

        assert_eq!(result, TestResult::failure("boom"));
    }

    #[test]
    fn test_missing_optional_fields_are_not_fatal() {
        let result: TestResult = serde_json::from_value(json!({"success": true})).unwrap();

        assert_eq!(
            result,
            TestResult::Success {
                status_code: 0,
                headers: None,
                body: String::new(),
            }
        );
    }

    #[test]
    fn test_encode_failure_omits_success_fields() {
        let wire = serde_json::to_value(TestResult::failure("boom")).unwrap();
        assert_eq!(wire, json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn test_encode_success_uses_camel_case() {
        let wire = serde_json::to_value(TestResult::Success {
            status_code: 201,
            headers: None,
            body: "created".to_string(),
        })
        .unwrap();

        assert_eq!(
            wire,
            json!({"success": true, "statusCode": 201, "body": "created"})
        );
    }
}
