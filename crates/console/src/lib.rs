//! Probe Console - Interactive console layer
//!
//! Owns the form state for one console session and drives the
//! build/validate/dispatch/render cycle against a backend proxy.

pub mod controller;
pub mod render;
pub mod repl;
pub mod state;

pub use controller::ConsoleController;
pub use render::{RenderedOutput, render};
pub use state::ConsoleState;
