//! Screen-wide error channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component may report a failure here and any component may read it to
//! show a banner. The channel holds a single current error: a new report
//! replaces the previous one and nothing is queued.
//!
//! DESIGN
//! ======
//! `ErrorChannel` is an explicit read/write capability provided through
//! context by the app root, so every writer is visible at its call site and
//! tests can build one without a global.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use leptos::prelude::*;

/// A failure reported by some collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    /// Short name of the subsystem that failed, e.g. `compiler list`.
    pub origin: String,
    pub message: String,
}

impl ErrorReport {
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self { origin: origin.into(), message: message.into() }
    }

    /// Single-line text suitable for a banner.
    pub fn summary(&self) -> String {
        if self.origin.is_empty() {
            self.message.clone()
        } else {
            format!("{}: {}", self.origin, self.message)
        }
    }
}

/// Current-error slot. Last write wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub current: Option<ErrorReport>,
}

impl ErrorState {
    pub fn set(&mut self, error: Option<ErrorReport>) {
        self.current = error;
    }
}

/// Read/write handle to the screen's [`ErrorState`].
#[derive(Clone, Copy, Debug)]
pub struct ErrorChannel {
    state: RwSignal<ErrorState>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ErrorState::default()) }
    }

    /// Current error, tracked so readers re-render on writes.
    pub fn read(&self) -> Option<ErrorReport> {
        self.state.with(|s| s.current.clone())
    }

    pub fn read_untracked(&self) -> Option<ErrorReport> {
        self.state.with_untracked(|s| s.current.clone())
    }

    /// Overwrite the current error. `None` clears it.
    pub fn write(&self, error: Option<ErrorReport>) {
        self.state.update(|s| s.set(error));
    }

    pub fn report(&self, error: ErrorReport) {
        self.write(Some(error));
    }

    pub fn clear(&self) {
        self.write(None);
    }
}

impl Default for ErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the channel and provide it to all descendants.
pub fn provide_error_channel() -> ErrorChannel {
    let channel = ErrorChannel::new();
    provide_context(channel);
    channel
}

/// The channel provided by an ancestor.
///
/// # Panics
///
/// Panics if no ancestor called [`provide_error_channel`].
pub fn use_error_channel() -> ErrorChannel {
    expect_context::<ErrorChannel>()
}
