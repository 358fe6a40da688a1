//! Route-level screens.
//!
//! The compiler screen is the only page: it owns the catalog fetch and the
//! readiness gate, and leaves region markup to `components`.

pub mod wandbox;
