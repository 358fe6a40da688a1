//! Helpers that are not tied to one screen.
//!
//! `mount` ties async work to a component's lifetime so late results can be
//! dropped after unmount.

pub mod mount;
