//! End-to-end tests: console controller against a live proxy router over
//! loopback HTTP.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use probe_console::ConsoleController;
use probe_domain::{HttpMethod, RequestDescriptor, TestResult};
use probe_infrastructure::HttpProxyClient;
use probe_server::{Forward, router};

/// Forwarder double standing in for real outbound traffic.
struct StubForwarder {
    reply: TestResult,
    seen: Mutex<Vec<RequestDescriptor>>,
}

#[async_trait]
impl Forward for StubForwarder {
    async fn run(&self, descriptor: &RequestDescriptor) -> TestResult {
        self.seen.lock().unwrap().push(descriptor.clone());
        self.reply.clone()
    }
}

/// Serves the proxy router on an ephemeral loopback port.
async fn spawn_proxy(forwarder: Arc<StubForwarder>) -> SocketAddr {
    let app = router(forwarder);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_full_cycle_over_loopback() {
    let stub = Arc::new(StubForwarder {
        reply: TestResult::Success {
            status_code: 200,
            headers: None,
            body: "{\"ok\":true}".to_string(),
        },
        seen: Mutex::new(Vec::new()),
    });
    let addr = spawn_proxy(Arc::clone(&stub)).await;

    let client = HttpProxyClient::new(&format!("http://{addr}")).unwrap();
    let mut controller = ConsoleController::new(client);

    controller.set_endpoint("/users");
    controller.set_method(HttpMethod::Get);
    controller.edit_key(0, "id");
    controller.edit_value(0, "5");
    controller.submit().await.unwrap();

    // The descriptor arrived at the proxy exactly as built.
    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].endpoint, "/users");
    assert_eq!(seen[0].method, HttpMethod::Get);
    assert_eq!(seen[0].parameters.get("id"), Some(&"5".to_string()));
    drop(seen);

    let output = controller.output().unwrap();
    assert!(!output.error);
    assert!(output.text.contains("Status Code: 200"));
    assert!(output.text.contains("{\"ok\":true}"));
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_proxy_reported_failure_renders_error() {
    let stub = Arc::new(StubForwarder {
        reply: TestResult::failure("boom"),
        seen: Mutex::new(Vec::new()),
    });
    let addr = spawn_proxy(stub).await;

    let client = HttpProxyClient::new(&format!("http://{addr}")).unwrap();
    let mut controller = ConsoleController::new(client);

    controller.set_endpoint("/broken");
    controller.submit().await.unwrap();

    let output = controller.output().unwrap();
    assert!(output.error);
    assert_eq!(output.text, "Error: boom");
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_unreachable_proxy_renders_transport_error() {
    // Bind and immediately drop a listener to get a port nothing serves.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpProxyClient::new(&format!("http://{addr}")).unwrap();
    let mut controller = ConsoleController::new(client);

    controller.set_endpoint("/users");
    controller.submit().await.unwrap();

    let output = controller.output().unwrap();
    assert!(output.error);
    assert!(output.text.starts_with("Error: "));
    assert!(!controller.is_busy());
}
