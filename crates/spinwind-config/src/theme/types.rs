//! Theme file types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level structure of a spinwind config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFile {
    pub theme: ThemeSection,
}

/// The `[theme]` section.
///
/// Scales written directly under `[theme]` replace the default scale of the
/// same name; scales under `[theme.extend]` are merged into it. Values are
/// kept untyped; the generators validate them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    pub extend: Map<String, Value>,
    #[serde(flatten)]
    pub scales: Map<String, Value>,
}

impl ThemeSection {
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.scales.is_empty()
    }
}
