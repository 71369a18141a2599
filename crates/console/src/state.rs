//! Console session state.
//!
//! The original page kept this state in module-level DOM nodes; here it is
//! an explicit struct owned by the controller for one session.

use probe_domain::{BusyFlag, HttpMethod, ParameterRows};

use crate::render::RenderedOutput;

/// State for one console session.
#[derive(Debug, Default)]
pub struct ConsoleState {
    /// Raw endpoint input, trimmed only at build time.
    pub endpoint_input: String,
    /// Currently selected HTTP method.
    pub method: HttpMethod,
    /// The parameter row store.
    pub rows: ParameterRows,
    /// Busy flag shared with the dispatcher.
    pub busy: BusyFlag,
    /// Output region: the last rendered outcome, if any.
    pub output: Option<RenderedOutput>,
}

impl ConsoleState {
    /// Creates a fresh session with one empty parameter row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fresh_session_defaults() {
        let state = ConsoleState::new();
        assert_eq!(state.endpoint_input, "");
        assert_eq!(state.method, HttpMethod::Get);
        assert_eq!(state.rows.len(), 1);
        assert!(!state.busy.is_busy());
        assert!(state.output.is_none());
    }
}
