//! Port implementations backed by external services.

mod proxy_client;

pub use proxy_client::HttpProxyClient;
