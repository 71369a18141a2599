//! Probe backend proxy server.
//!
//! Exposes the wire contract consumed by the console: `POST /api/test`
//! takes the serialized request descriptor, performs the outbound call and
//! replies with the normalized result. Outbound failures are encoded in
//! the reply body, so the proxy exchange itself always answers 200.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{Json, Router, extract::State, routing::post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use probe_domain::{RequestDescriptor, TestResult};
use probe_infrastructure::Forwarder;

/// Seam for executing tested requests, so the router can be exercised
/// without real outbound traffic.
#[async_trait]
pub trait Forward: Send + Sync {
    /// Performs the tested request, folding failures into the result.
    async fn run(&self, descriptor: &RequestDescriptor) -> TestResult;
}

#[async_trait]
impl Forward for Forwarder {
    async fn run(&self, descriptor: &RequestDescriptor) -> TestResult {
        self.forward(descriptor).await
    }
}

/// Builds the proxy router over the given forwarder.
pub fn router(forwarder: Arc<dyn Forward>) -> Router {
    Router::new()
        .route("/api/test", post(test_api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(forwarder)
}

async fn test_api(
    State(forwarder): State<Arc<dyn Forward>>,
    Json(descriptor): Json<RequestDescriptor>,
) -> Json<TestResult> {
    info!(
        method = %descriptor.method,
        endpoint = %descriptor.endpoint,
        "proxying test request"
    );
    Json(forwarder.run(&descriptor).await)
}

/// Binds `addr` and serves the proxy until shutdown.
///
/// # Errors
///
/// Returns an error when the outbound client cannot be constructed or when
/// binding or serving fails.
pub async fn run_server(addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let forwarder = Arc::new(Forwarder::new()?);
    let app = router(forwarder);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
