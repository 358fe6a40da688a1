//! Networking modules for the compiler service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` fetches the compiler list over HTTP and `types` defines the wire
//! schema of that list.

pub mod catalog;
pub mod types;
