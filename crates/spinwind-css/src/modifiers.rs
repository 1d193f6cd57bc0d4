//! Modifier derivation.
//!
//! Each stage takes a derived mapping and returns a new one; nothing is
//! mutated in place and nothing is re-validated. Stages run in a fixed
//! order: axis expansion, name prefixing, sign expansion.

use indexmap::IndexMap;
use spinwind_common::{Axis, Sign};
use std::collections::HashSet;

/// A value with the axis and sign it was expanded into.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived<T> {
    pub value: T,
    pub axis: Option<Axis>,
    pub sign: Sign,
}

/// Derived entries keyed by their synthesized modifier.
pub type DerivedMap<T> = IndexMap<String, Derived<T>>;

/// How the negative variant's key is marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegativeMarker {
    Prefix(String),
    Suffix(String),
}

impl NegativeMarker {
    pub fn mark(&self, key: &str) -> String {
        match self {
            NegativeMarker::Prefix(marker) => format!("{marker}{key}"),
            NegativeMarker::Suffix(marker) => format!("{key}{marker}"),
        }
    }
}

impl Default for NegativeMarker {
    fn default() -> Self {
        NegativeMarker::Prefix("-".into())
    }
}

/// Parameters of a derived-utility family.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierOptions {
    pub axes: Vec<Axis>,
    pub separator: String,
    pub negative_marker: NegativeMarker,
}

impl Default for ModifierOptions {
    fn default() -> Self {
        Self {
            axes: Axis::ALL.to_vec(),
            separator: "-".into(),
            negative_marker: NegativeMarker::default(),
        }
    }
}

/// Wrap normalized values as positive, axis-less entries.
pub fn lift<T>(values: IndexMap<String, T>) -> DerivedMap<T> {
    values
        .into_iter()
        .map(|(key, value)| {
            let derived = Derived {
                value,
                axis: None,
                sign: Sign::Positive,
            };
            (key, derived)
        })
        .collect()
}

/// One entry per axis, keyed `{axis}{separator}{key}`.
pub fn expand_axes<T: Clone>(
    entries: DerivedMap<T>,
    axes: &[Axis],
    separator: &str,
) -> DerivedMap<T> {
    let mut expanded = DerivedMap::with_capacity(entries.len() * axes.len());
    for (key, entry) in entries {
        for axis in axes {
            expanded.insert(
                format!("{axis}{separator}{key}"),
                Derived {
                    axis: Some(*axis),
                    ..entry.clone()
                },
            );
        }
    }
    expanded
}

/// Prefix every key with `{name}{separator}`. An empty name leaves keys alone.
pub fn prefix_name<T>(entries: DerivedMap<T>, name: &str, separator: &str) -> DerivedMap<T> {
    if name.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .map(|(key, entry)| (format!("{name}{separator}{key}"), entry))
        .collect()
}

/// A positive and a negative variant of every entry, positive first.
///
/// Positive keys win: a marked key equal to any input key is not emitted, so
/// an empty marker or a suffix like `"0"` over keys `4` and `40` never
/// reassigns a key to the other sign.
pub fn expand_signs<T: Clone>(entries: DerivedMap<T>, marker: &NegativeMarker) -> DerivedMap<T> {
    let positives: HashSet<String> = entries.keys().cloned().collect();
    let mut expanded = DerivedMap::with_capacity(entries.len() * 2);
    for (key, entry) in entries {
        let negative = marker.mark(&key);
        let collides = positives.contains(&negative);
        expanded.insert(
            key.clone(),
            Derived {
                sign: Sign::Positive,
                ..entry.clone()
            },
        );
        if collides {
            tracing::warn!(key = %key, marked = %negative, "negative key collides, skipping");
            continue;
        }
        expanded.insert(
            negative,
            Derived {
                sign: Sign::Negative,
                ..entry
            },
        );
    }
    expanded
}

/// Run the full derivation: axes, then name, then signs.
pub fn derive<T: Clone>(
    values: IndexMap<String, T>,
    name: &str,
    options: &ModifierOptions,
) -> DerivedMap<T> {
    let entries = lift(values);
    let entries = expand_axes(entries, &options.axes, &options.separator);
    let entries = prefix_name(entries, name, &options.separator);
    expand_signs(entries, &options.negative_marker)
}
