use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered declaration tree: property or selector name to entry.
///
/// Mirrors the CSS-in-JS objects hosts consume: leaves are value strings,
/// nested objects are keyframe steps or at-rule markers.
pub type CssObject = IndexMap<String, CssEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssEntry {
    Value(String),
    Block(CssObject),
}

impl CssEntry {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            CssEntry::Value(value) => Some(value),
            CssEntry::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&CssObject> {
        match self {
            CssEntry::Value(_) => None,
            CssEntry::Block(block) => Some(block),
        }
    }

    /// An empty nested object, used for marker entries such as
    /// `@defaults transform`.
    pub fn empty_block() -> Self {
        CssEntry::Block(CssObject::new())
    }
}

impl From<&str> for CssEntry {
    fn from(value: &str) -> Self {
        CssEntry::Value(value.to_string())
    }
}

impl From<String> for CssEntry {
    fn from(value: String) -> Self {
        CssEntry::Value(value)
    }
}

impl From<CssObject> for CssEntry {
    fn from(block: CssObject) -> Self {
        CssEntry::Block(block)
    }
}

/// Build a [`CssObject`] from `(name, entry)` pairs, keeping their order.
pub fn css_object<I, K>(entries: I) -> CssObject
where
    I: IntoIterator<Item = (K, CssEntry)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, entry)| (name.into(), entry))
        .collect()
}
