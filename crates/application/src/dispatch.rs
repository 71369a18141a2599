//! Dispatch use case
//!
//! Sends a built descriptor through the proxy port while managing the
//! shared busy flag for the console.

use probe_domain::{BusyFlag, RequestDescriptor, TestResult};

use crate::ports::{ProxyClient, TransportError};

/// Use case for dispatching one test request through the backend proxy.
pub struct Dispatcher<C: ProxyClient> {
    client: C,
    busy: BusyFlag,
}

/// Clears the busy flag when dropped, so busy-state exit runs exactly once
/// per dispatch even if the dispatch future is dropped mid-flight.
struct BusyGuard<'a>(&'a BusyFlag);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.clear();
    }
}

impl<C: ProxyClient> Dispatcher<C> {
    /// Creates a dispatcher over the given proxy client and busy flag.
    #[must_use]
    pub const fn new(client: C, busy: BusyFlag) -> Self {
        Self { client, busy }
    }

    /// Returns a handle to the shared busy flag.
    #[must_use]
    pub const fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    /// Sends the descriptor to the backend proxy and classifies the reply.
    ///
    /// The busy flag is set before the exchange starts and cleared after
    /// it resolves, on every path: success, proxy-reported failure and
    /// transport error.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when the exchange fails at the network or
    /// decoding level. A proxy-reported failure is a normal
    /// `TestResult::Failure`, not an error.
    pub async fn dispatch(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<TestResult, TransportError> {
        self.busy.enter();
        let _guard = BusyGuard(&self.busy);
        self.client.submit(descriptor).await
    }
}
