//! Backend proxy port

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use probe_domain::{RequestDescriptor, TestResult};

/// Failures of the dispatch exchange itself, as opposed to failures the
/// proxy reports inside a well-formed reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The proxy base URL or the resolved request URL is invalid.
    #[error("invalid proxy URL: {0}")]
    InvalidUrl(String),

    /// The exchange never produced a well-formed HTTP reply.
    #[error("{0}")]
    Network(String),

    /// The proxy answered outside the 2xx range.
    #[error("proxy returned status {code}")]
    Status {
        /// HTTP status code of the proxy reply.
        code: u16,
    },

    /// The proxy reply was not valid result JSON.
    #[error("malformed proxy reply: {0}")]
    Decode(String),
}

/// Port for submitting a request descriptor to the backend proxy.
///
/// The exchange is always a single uniform POST of the serialized
/// descriptor, regardless of the HTTP method being tested.
pub trait ProxyClient: Send + Sync {
    /// Submits the descriptor and decodes the proxy's reply.
    fn submit(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Pin<Box<dyn Future<Output = Result<TestResult, TransportError>> + Send + '_>>;
}
