//! Shared compiler catalog handle.
//!
//! DESIGN
//! ======
//! The catalog is loaded once per page mount and then only read. It is held
//! behind an `Arc` so every region that receives it shares one allocation,
//! and `same_instance` can tell fan-out copies apart from a refetch.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::net::types::CompilerInfo;

/// Immutable set of toolchains the compiler service currently supports.
#[derive(Clone, Debug, Default)]
pub struct CompilerCatalog {
    compilers: Arc<[CompilerInfo]>,
}

impl CompilerCatalog {
    pub fn new(compilers: Vec<CompilerInfo>) -> Self {
        Self { compilers: compilers.into() }
    }

    /// `true` when both handles point at the same loaded catalog.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.compilers, &other.compilers)
    }

    pub fn len(&self) -> usize {
        self.compilers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compilers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompilerInfo> {
        self.compilers.iter()
    }

    /// Distinct languages, sorted.
    pub fn languages(&self) -> Vec<String> {
        self.compilers
            .iter()
            .map(|c| c.language.clone())
            .filter(|l| !l.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Compilers for one language, in catalog order.
    pub fn compilers_for<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a CompilerInfo> + 'a {
        self.compilers.iter().filter(move |c| c.language == language)
    }

    pub fn find(&self, name: &str) -> Option<&CompilerInfo> {
        self.compilers.iter().find(|c| c.name == name)
    }
}

impl PartialEq for CompilerCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other) || self.compilers == other.compilers
    }
}

impl Eq for CompilerCatalog {}

impl From<Vec<CompilerInfo>> for CompilerCatalog {
    fn from(compilers: Vec<CompilerInfo>) -> Self {
        Self::new(compilers)
    }
}
