//! Application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs live here; pages wrap them in `RwSignal` and provide
//! them to the component tree.

pub mod catalog;
pub mod error;
pub mod readiness;
pub mod selection;
