//! Probe Domain - Core business types
//!
//! This crate defines the domain model for the Probe API testing console.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod outcome;
pub mod request;
pub mod state;

pub use error::{DomainError, DomainResult};
pub use outcome::TestResult;
pub use request::{HttpMethod, ParameterRow, ParameterRows, ParameterSet, RequestDescriptor};
pub use state::BusyFlag;
