//! Outbound HTTP for the backend proxy.

mod forwarder;

pub use forwarder::Forwarder;
