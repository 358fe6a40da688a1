//! Two-state readiness gate for the compiler screen.
//!
//! DESIGN
//! ======
//! Readiness is derived from the catalog: `Loading` until the first catalog
//! arrives, then `Ready` for the rest of the mount. A failed load never
//! produces a third state; the gate simply stays `Loading` while the error
//! goes to the error channel.

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_test;

use super::catalog::CompilerCatalog;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Readiness {
    #[default]
    Loading,
    Ready(CompilerCatalog),
}

impl Readiness {
    /// Feed one loader observation into the gate.
    ///
    /// Returns `true` only on the `Loading -> Ready` transition. `Ready` is
    /// terminal: later catalogs are ignored so every region keeps the instance
    /// it was first handed.
    pub fn observe(&mut self, catalog: Option<CompilerCatalog>) -> bool {
        if self.is_ready() {
            return false;
        }
        let Some(catalog) = catalog else {
            return false;
        };
        *self = Self::Ready(catalog);
        true
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn catalog(&self) -> Option<&CompilerCatalog> {
        match self {
            Self::Loading => None,
            Self::Ready(catalog) => Some(catalog),
        }
    }
}
