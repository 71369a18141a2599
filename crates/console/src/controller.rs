//! Console controller.
//!
//! Owns the session state and maps user interactions onto the request
//! cycle, replacing the original page's inline event handlers and
//! module-level DOM state.

use probe_application::{Dispatcher, ProxyClient, ValidationError, validate};
use probe_domain::{HttpMethod, ParameterRow, RequestDescriptor};

use crate::render::{RenderedOutput, render};
use crate::state::ConsoleState;

/// Drives one console session against a backend proxy.
pub struct ConsoleController<C: ProxyClient> {
    state: ConsoleState,
    dispatcher: Dispatcher<C>,
}

impl<C: ProxyClient> ConsoleController<C> {
    /// Creates a controller over the given proxy client.
    #[must_use]
    pub fn new(client: C) -> Self {
        let state = ConsoleState::new();
        let dispatcher = Dispatcher::new(client, state.busy.clone());
        Self { state, dispatcher }
    }

    /// Replaces the endpoint input.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint_input = endpoint.into();
    }

    /// Selects the HTTP method to test with.
    pub fn set_method(&mut self, method: HttpMethod) {
        self.state.method = method;
    }

    /// Appends an empty parameter row.
    pub fn add_row(&mut self) {
        self.state.rows.add();
    }

    /// Removes the indexed parameter row; no-op on the last remaining row.
    pub fn remove_row(&mut self, index: usize) {
        self.state.rows.remove(index);
    }

    /// Edits the key of the indexed row.
    pub fn edit_key(&mut self, index: usize, key: impl Into<String>) {
        self.state.rows.set_key(index, key);
    }

    /// Edits the value of the indexed row.
    pub fn edit_value(&mut self, index: usize, value: impl Into<String>) {
        self.state.rows.set_value(index, value);
    }

    /// Returns the live parameter rows.
    #[must_use]
    pub fn rows(&self) -> &[ParameterRow] {
        self.state.rows.all()
    }

    /// Returns the session state.
    #[must_use]
    pub const fn state(&self) -> &ConsoleState {
        &self.state
    }

    /// Returns true while a dispatch is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.busy.is_busy()
    }

    /// Returns the last rendered output, if any.
    #[must_use]
    pub fn output(&self) -> Option<&RenderedOutput> {
        self.state.output.as_ref()
    }

    /// Builds, validates and dispatches the current form, then renders the
    /// outcome into the output region.
    ///
    /// A validation failure aborts before any busy-state change or network
    /// traffic and leaves the output region untouched. Re-entry while busy
    /// is a no-op, mirroring the disabled submit control.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the caller to surface synchronously.
    pub async fn submit(&mut self) -> Result<(), ValidationError> {
        let descriptor = RequestDescriptor::build(
            &self.state.endpoint_input,
            self.state.method,
            self.state.rows.all(),
        );
        validate(&descriptor)?;

        if self.state.busy.is_busy() {
            return Ok(());
        }

        self.state.output = None;
        let outcome = self.dispatcher.dispatch(&descriptor).await;
        self.state.output = Some(render(&outcome));
        Ok(())
    }
}
