//! Theme resolution seam.
//!
//! Generators never see the concrete theme type; they ask a [`ThemeLookup`]
//! for a scale and treat the answer as untrusted until it passes the shape
//! guards.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Resolves design-token scales from a merged theme.
pub trait ThemeLookup {
    /// Look up a scale (or a dotted path into one, e.g. `spacing.4`).
    fn theme(&self, path: &str) -> Option<&Value>;

    /// Like [`ThemeLookup::theme`], but a missing scale reads as `null`.
    fn scale(&self, path: &str) -> &Value {
        self.theme(path).unwrap_or(&NULL)
    }
}

impl ThemeLookup for Value {
    fn theme(&self, path: &str) -> Option<&Value> {
        lookup_path(self, path)
    }
}

impl ThemeLookup for serde_json::Map<String, Value> {
    fn theme(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.get(path) {
            return Some(value);
        }
        path.match_indices('.').find_map(|(idx, _)| {
            let (head, rest) = (&path[..idx], &path[idx + 1..]);
            self.get(head).and_then(|value| lookup_path(value, rest))
        })
    }
}

/// Resolve a dotted path inside a JSON value.
///
/// Keys may themselves contain dots (`spacing.0.5` resolves `spacing` then
/// `0.5`), so an exact key match is tried before splitting.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    match root {
        Value::Object(map) => map.theme(path),
        _ => None,
    }
}
