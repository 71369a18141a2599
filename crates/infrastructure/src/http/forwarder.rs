//! Outbound request forwarder.
//!
//! Performs the actual HTTP call against the tested endpoint on behalf of
//! the console and folds every failure into the proxy's normalized result,
//! so the proxy exchange itself always succeeds.

use std::collections::HashMap;

use reqwest::{Client, Method, header};
use tracing::{debug, warn};

use probe_domain::{HttpMethod, RequestDescriptor, TestResult};

/// Executes tested requests for the backend proxy.
pub struct Forwarder {
    client: Client,
}

impl Forwarder {
    /// Creates a forwarder with a default outbound client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("Probe/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Creates a forwarder over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts the domain method to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
        }
    }

    /// Re-serializes JSON bodies indented; anything else passes through
    /// verbatim.
    fn prettify_body(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body).map_or_else(
            |_| body.to_string(),
            |value| serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        )
    }

    /// Performs the tested request described by `descriptor`.
    ///
    /// Never fails outward: network errors, invalid endpoints and non-2xx
    /// statuses from the tested endpoint all fold into
    /// `TestResult::Failure`.
    pub async fn forward(&self, descriptor: &RequestDescriptor) -> TestResult {
        match self.try_forward(descriptor).await {
            Ok(result) => result,
            Err(error) => {
                warn!(endpoint = %descriptor.endpoint, %error, "forwarding failed");
                TestResult::failure(error.to_string())
            }
        }
    }

    async fn try_forward(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<TestResult, reqwest::Error> {
        let method = descriptor.method;
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(method), &descriptor.endpoint)
            .header(header::ACCEPT, "application/json");

        // GET parameters travel as a query string; DELETE always carries a
        // JSON body; the remaining body methods send one only when
        // parameters exist.
        match method {
            HttpMethod::Get => {
                if !descriptor.parameters.is_empty() {
                    builder = builder.query(&descriptor.parameters);
                }
            }
            HttpMethod::Delete => {
                builder = builder.json(&descriptor.parameters);
            }
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => {
                if !descriptor.parameters.is_empty() {
                    builder = builder.json(&descriptor.parameters);
                }
            }
        }

        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            return Ok(TestResult::failure(format!(
                "{status} from {method} {url}"
            )));
        }

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response.text().await?;
        debug!(status = status.as_u16(), %url, "forwarded request resolved");

        Ok(TestResult::Success {
            status_code: status.as_u16(),
            headers: Some(headers),
            body: Self::prettify_body(&body),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(Forwarder::to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(Forwarder::to_reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(Forwarder::to_reqwest_method(HttpMethod::Put), Method::PUT);
        assert_eq!(
            Forwarder::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
        assert_eq!(
            Forwarder::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
    }

    #[test]
    fn test_forwarder_creation() {
        assert!(Forwarder::new().is_ok());
    }

    #[test]
    fn test_prettify_json_body() {
        let pretty = Forwarder::prettify_body("{\"ok\":true}");
        assert_eq!(pretty, "{\n  \"ok\": true\n}");
    }

    #[test]
    fn test_prettify_leaves_plain_text_alone() {
        assert_eq!(Forwarder::prettify_body("hello world"), "hello world");
    }

    #[tokio::test]
    async fn test_invalid_endpoint_folds_into_failure() {
        let forwarder = Forwarder::new().unwrap();
        let descriptor = RequestDescriptor::build("not a url", HttpMethod::Get, &[]);

        let result = forwarder.forward(&descriptor).await;
        assert!(!result.is_success());
    }
}
