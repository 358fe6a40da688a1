//! Screen region components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The compiler page composes these regions top to bottom. Catalog consumers
//! take the catalog as a prop and share the selection signal from context.

pub mod command;
pub mod editor;
pub mod header;
pub mod result;
pub mod sidebar;
