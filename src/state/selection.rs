//! Toolchain selection shared by the sidebar, editor, and command bar.
//!
//! DESIGN
//! ======
//! Selection is derived from the catalog when the screen first becomes ready
//! and lives only in memory. Regions read the catalog; they never modify it.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeMap;

use super::catalog::CompilerCatalog;
use crate::net::types::{CompilerInfo, Switch};

/// Current language/compiler choice, switch settings, and source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub language: Option<String>,
    pub compiler: Option<String>,
    /// Single switches by name -> enabled.
    pub flags: BTreeMap<String, bool>,
    /// Select switches by group key -> chosen option name.
    pub choices: BTreeMap<String, String>,
    pub source: String,
}

impl SelectionState {
    /// First language in the catalog and its first compiler.
    pub fn initial(catalog: &CompilerCatalog) -> Self {
        let mut state = Self::default();
        if let Some(language) = catalog.languages().into_iter().next() {
            state.select_language(catalog, &language);
        }
        state
    }

    /// Switch language and fall back to its first compiler.
    pub fn select_language(&mut self, catalog: &CompilerCatalog, language: &str) {
        self.language = Some(language.to_owned());
        let first = catalog.compilers_for(language).next().map(|c| c.name.clone());
        match first {
            Some(name) => self.select_compiler(catalog, &name),
            None => {
                self.compiler = None;
                self.flags.clear();
                self.choices.clear();
            }
        }
    }

    /// Pick a compiler and reset switches to its defaults. Unknown names are
    /// ignored.
    pub fn select_compiler(&mut self, catalog: &CompilerCatalog, name: &str) {
        let Some(info) = catalog.find(name) else {
            return;
        };
        self.compiler = Some(info.name.clone());
        if !info.language.is_empty() {
            self.language = Some(info.language.clone());
        }
        self.flags.clear();
        self.choices.clear();
        for switch in &info.switches {
            match switch {
                Switch::Single(single) => {
                    self.flags.insert(single.name.clone(), single.default);
                }
                Switch::Select(select) => {
                    self.choices.insert(select.key().to_owned(), select.default.clone());
                }
            }
        }
    }

    pub fn set_flag(&mut self, name: &str, enabled: bool) {
        if let Some(flag) = self.flags.get_mut(name) {
            *flag = enabled;
        }
    }

    pub fn set_choice(&mut self, key: &str, option: &str) {
        if let Some(choice) = self.choices.get_mut(key) {
            option.clone_into(choice);
        }
    }

    pub fn compiler_info<'a>(&self, catalog: &'a CompilerCatalog) -> Option<&'a CompilerInfo> {
        self.compiler.as_deref().and_then(|name| catalog.find(name))
    }
}

/// Compile command preview: the compiler's display command followed by the
/// flags of every active switch, in switch order.
pub fn command_line(info: &CompilerInfo, selection: &SelectionState) -> String {
    let mut parts = Vec::new();
    if !info.display_compile_command.is_empty() {
        parts.push(info.display_compile_command.clone());
    }
    for switch in &info.switches {
        let flags = match switch {
            Switch::Single(single) => {
                let enabled = selection.flags.get(&single.name).copied().unwrap_or(single.default);
                if enabled { single.display_flags.as_str() } else { "" }
            }
            Switch::Select(select) => {
                let chosen = selection.choices.get(select.key()).map_or(select.default.as_str(), String::as_str);
                select.option(chosen).map_or("", |o| o.display_flags.as_str())
            }
        };
        if !flags.is_empty() {
            parts.push(flags.to_owned());
        }
    }
    parts.join(" ")
}
