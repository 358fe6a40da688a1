//! Wire types for the compiler list document.
//!
//! DESIGN
//! ======
//! The compiler service speaks kebab-case JSON. Every optional field carries a
//! serde default so older or trimmed-down deployments still parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One toolchain entry in the compiler list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompilerInfo {
    /// Unique compiler id, e.g. `gcc-12.1.0`.
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_compile_command: String,
    #[serde(default)]
    pub compiler_option_raw: bool,
    #[serde(default)]
    pub runtime_option_raw: bool,
    #[serde(default)]
    pub provider: Option<i64>,
    #[serde(default)]
    pub templates: Vec<String>,
    #[serde(default)]
    pub switches: Vec<Switch>,
}

impl CompilerInfo {
    /// Human label, falling back to the id when the service omits one.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() { &self.name } else { &self.display_name }
    }
}

/// A compiler switch, either an on/off flag or a one-of-many choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Switch {
    Single(SingleSwitch),
    Select(SelectSwitch),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SingleSwitch {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_flags: String,
    #[serde(default)]
    pub default: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SelectSwitch {
    /// Name of the option chosen when the user has not picked one.
    pub default: String,
    #[serde(default)]
    pub options: Vec<SwitchOption>,
}

impl SelectSwitch {
    /// Key under which the chosen option is stored. Select switches have no
    /// name of their own, so the default option's name identifies the group.
    pub fn key(&self) -> &str {
        &self.default
    }

    pub fn option(&self, name: &str) -> Option<&SwitchOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SwitchOption {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_flags: String,
}
