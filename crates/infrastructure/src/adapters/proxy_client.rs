//! Proxy client implementation using reqwest.
//!
//! This adapter implements the `ProxyClient` port against the backend
//! proxy's `POST /api/test` wire contract.

use std::future::Future;
use std::pin::Pin;

use reqwest::{Client, Url};
use tracing::debug;

use probe_application::ports::{ProxyClient, TransportError};
use probe_domain::{RequestDescriptor, TestResult};

/// Path of the proxy's test endpoint.
const TEST_PATH: &str = "/api/test";

/// Backend proxy client backed by `reqwest::Client`.
pub struct HttpProxyClient {
    client: Client,
    test_url: Url,
}

impl HttpProxyClient {
    /// Creates a client for the proxy at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is invalid or the underlying
    /// client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {base_url}")))?;
        let test_url = base
            .join(TEST_PATH)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {base_url}")))?;
        let client = Client::builder()
            .user_agent(concat!("Probe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { client, test_url })
    }

    /// Creates a client over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, test_url: Url) -> Self {
        Self { client, test_url }
    }

    /// Maps reqwest errors to the transport error taxonomy.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_decode() {
            return TransportError::Decode(error.to_string());
        }
        TransportError::Network(error.to_string())
    }
}

impl ProxyClient for HttpProxyClient {
    fn submit(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Pin<Box<dyn Future<Output = Result<TestResult, TransportError>> + Send + '_>> {
        // The descriptor is serialized eagerly, before the exchange starts.
        let request = self.client.post(self.test_url.clone()).json(descriptor);

        Box::pin(async move {
            let response = request.send().await.map_err(|e| Self::map_error(&e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status {
                    code: status.as_u16(),
                });
            }
            debug!(status = status.as_u16(), "proxy reply received");

            response
                .json::<TestResult>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))
        })
    }
}
