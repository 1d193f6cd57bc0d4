//! Merging user overrides onto the default scales.

use super::types::ThemeSection;
use crate::defaults::default_scales;
use serde::Serialize;
use serde_json::{Map, Value};
use spinwind_common::ThemeLookup;

/// A resolved theme: defaults with user overrides applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Theme {
    scales: Map<String, Value>,
}

impl Theme {
    /// The default theme with no overrides.
    pub fn defaults() -> Self {
        Self {
            scales: default_scales().clone(),
        }
    }

    /// Build a theme from raw scales, without defaults.
    pub fn from_scales(scales: Map<String, Value>) -> Self {
        Self { scales }
    }

    /// Apply a `[theme]` section on top of the defaults.
    pub fn merged(section: &ThemeSection) -> Self {
        let mut theme = Self::defaults();
        theme.apply(section);
        theme
    }

    /// Apply a `[theme]` section on top of this theme.
    ///
    /// Replacements run before extensions, so `extend` can add to a scale the
    /// same file replaced.
    pub fn apply(&mut self, section: &ThemeSection) {
        for (name, value) in &section.scales {
            tracing::debug!(scale = %name, "replacing scale");
            self.scales.insert(name.clone(), value.clone());
        }

        for (name, value) in &section.extend {
            match (self.scales.get_mut(name), value) {
                (Some(Value::Object(base)), Value::Object(extension)) => {
                    tracing::debug!(scale = %name, entries = extension.len(), "extending scale");
                    for (key, entry) in extension {
                        base.insert(key.clone(), entry.clone());
                    }
                }
                _ => {
                    tracing::debug!(scale = %name, "extending missing or non-table scale");
                    self.scales.insert(name.clone(), value.clone());
                }
            }
        }
    }

    pub fn scales(&self) -> &Map<String, Value> {
        &self.scales
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.scales)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ThemeLookup for Theme {
    fn theme(&self, path: &str) -> Option<&Value> {
        self.scales.theme(path)
    }
}
