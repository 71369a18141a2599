//! Request descriptor and parameter set derivation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::request::{HttpMethod, ParameterRow};

/// The key/value mapping submitted with a tested request.
///
/// Derived fresh at submission time; never contains an empty key.
pub type ParameterSet = HashMap<String, String>;

/// A fully assembled test request, built once per submission.
///
/// Serializes to the proxy wire form `{endpoint, method, parameters}` with
/// the method uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// The target URL or path being tested, already trimmed.
    pub endpoint: String,
    /// The HTTP method to test with.
    pub method: HttpMethod,
    /// The derived parameter set.
    pub parameters: ParameterSet,
}

impl RequestDescriptor {
    /// Builds a descriptor from the raw endpoint input and the live rows.
    ///
    /// The endpoint, keys and values are trimmed. Rows whose trimmed key is
    /// empty are dropped, and duplicate keys are resolved by sequential
    /// insertion, so the last occurrence wins.
    #[must_use]
    pub fn build(endpoint_raw: &str, method: HttpMethod, rows: &[ParameterRow]) -> Self {
        let mut parameters = ParameterSet::new();
        for row in rows {
            let key = row.key.trim();
            if !key.is_empty() {
                parameters.insert(key.to_string(), row.value.trim().to_string());
            }
        }

        Self {
            endpoint: endpoint_raw.trim().to_string(),
            method,
            parameters,
        }
    }

    /// Returns true when the trimmed endpoint is empty.
    #[must_use]
    pub fn has_empty_endpoint(&self) -> bool {
        self.endpoint.is_empty()
    }
}
