//! Probe interactive console binary.

use std::io;

use probe_console::ConsoleController;
use probe_infrastructure::HttpProxyClient;

const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8888";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proxy_url =
        std::env::var("PROBE_PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());

    let client = HttpProxyClient::new(&proxy_url)?;
    let mut controller = ConsoleController::new(client);

    let stdin = io::stdin();
    let stdout = io::stdout();
    probe_console::repl::run(&mut controller, stdin.lock(), stdout.lock()).await?;

    Ok(())
}
