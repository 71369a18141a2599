//! Probe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer, plus the outbound forwarder used by the proxy
//! server.

pub mod adapters;
pub mod http;

pub use adapters::HttpProxyClient;
pub use http::Forwarder;
