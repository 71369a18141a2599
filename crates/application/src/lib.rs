//! Probe Application - Use cases and ports
//!
//! This crate orchestrates the request cycle of the Probe console behind
//! ports implemented by the infrastructure layer.

pub mod dispatch;
pub mod guard;
pub mod ports;

pub use dispatch::Dispatcher;
pub use guard::{ValidationError, validate};
pub use ports::{ProxyClient, TransportError};
