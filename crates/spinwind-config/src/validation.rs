//! Structural validation of a config file.
//!
//! Checks only that every scale is a table of strings or string lists and
//! collects all problems into a single `ConfigError`. Value syntax is left
//! to the generators, which drop what they cannot canonicalize.

use crate::theme::ThemeFile;
use serde_json::{Map, Value};
use spinwind_common::ConfigError;

/// Run all validations on a config file, collecting all errors.
pub fn validate(file: &ThemeFile) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_scales(&mut errors, "theme", &file.theme.scales);
    validate_scales(&mut errors, "theme.extend", &file.theme.extend);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_scales(errors: &mut Vec<String>, section: &str, scales: &Map<String, Value>) {
    for (name, scale) in scales {
        let Some(entries) = scale.as_object() else {
            errors.push(format!("{section}.{name} must be a table"));
            continue;
        };
        for (key, entry) in entries {
            if !is_scale_entry(entry) {
                errors.push(format!(
                    "{section}.{name}.{key} must be a string or a list of strings"
                ));
            }
        }
    }
}

fn is_scale_entry(entry: &Value) -> bool {
    match entry {
        Value::String(_) => true,
        Value::Array(items) => items.iter().all(Value::is_string),
        _ => false,
    }
}
