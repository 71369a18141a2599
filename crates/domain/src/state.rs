//! Busy-state flag for the dispatch cycle.
//!
//! The original page gated re-submission by disabling the send button
//! while a request was in flight. Here that UI state is an explicit flag
//! owned by the console session and shared with the dispatcher.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared busy flag gating submission while a dispatch is in flight.
///
/// Handles are cheap to clone and all observe the same flag. Set and clear
/// are idempotent, so programmatic re-entry leaves the flag in the
/// requested state instead of toggling it.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    inner: Arc<AtomicBool>,
}

impl BusyFlag {
    /// Creates a new flag in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a dispatch as in flight.
    ///
    /// Returns false when the flag was already set.
    pub fn enter(&self) -> bool {
        !self.inner.swap(true, Ordering::SeqCst)
    }

    /// Marks the dispatch as resolved.
    pub fn clear(&self) {
        self.inner.store(false, Ordering::SeqCst);
    }

    /// Returns true while a dispatch is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}
