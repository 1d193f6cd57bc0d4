//! Mapping normalizers.
//!
//! Turn an untrusted theme scale into a mapping of canonical keys to
//! canonical values. Malformed input is never an error: a mapping with the
//! wrong shape becomes empty, and an entry whose key or values do not
//! canonicalize is dropped. The `*_with_report` variants also say what was
//! dropped and why.

use crate::css_value::{
    normalise_length_percentage_value, normalise_number_value, normalise_time_value, Normaliser,
};
use crate::guard::{parse_mapping, parse_single_mapping};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Key canonicalizer: `None` drops the entry.
pub type KeyNormaliser = fn(&str) -> Option<String>;

/// A pair whose slots are both canonical, non-empty CSS values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPair(pub String, pub String);

impl NormalizedPair {
    pub fn primary(&self) -> &str {
        &self.0
    }

    pub fn secondary(&self) -> &str {
        &self.1
    }
}

pub type NormalizedMapping = IndexMap<String, NormalizedPair>;

/// Why an entry was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The scale (or this entry's value) does not have the expected shape;
    /// the whole scale is discarded.
    ShapeMismatch,
    /// The key does not canonicalize to a non-empty string.
    KeyInvalid,
    /// The value in `slot` is not recognized for its category.
    ValueUnrecognized { slot: usize },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::ShapeMismatch => f.write_str("value does not have the expected shape"),
            DropReason::KeyInvalid => f.write_str("key is not a valid modifier"),
            DropReason::ValueUnrecognized { slot } => {
                write!(f, "value in slot {slot} is not recognized")
            }
        }
    }
}

/// One dropped entry. `key` is `None` when the whole scale was rejected
/// without an offending entry to blame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEntry {
    pub key: Option<String>,
    pub reason: DropReason,
}

/// Normalized values plus everything that was dropped on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalised<T> {
    pub values: IndexMap<String, T>,
    pub dropped: Vec<DroppedEntry>,
}

impl<T> Default for Normalised<T> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
            dropped: Vec::new(),
        }
    }
}

impl<T> Normalised<T> {
    fn drop_entry(&mut self, key: Option<&str>, reason: DropReason) {
        debug!(key = key.unwrap_or("<scale>"), %reason, "dropping theme entry");
        self.dropped.push(DroppedEntry {
            key: key.map(str::to_string),
            reason,
        });
    }
}

/// Canonicalize a spacing-scale key (`"04"` → `"4"`).
pub fn normalise_numeric_key(key: &str) -> Option<String> {
    normalise_number_value(Some(key), None)
}

/// Keep a key as-is if it is non-empty.
pub fn non_empty_key(key: &str) -> Option<String> {
    (!key.is_empty()).then(|| key.to_string())
}

/// Record a shape mismatch, blaming individual entries where possible.
fn report_shape_mismatch<T>(
    report: &mut Normalised<T>,
    input: &Value,
    entry_ok: fn(&Value) -> bool,
) {
    match input {
        // an absent scale is not a mismatch
        Value::Null => {}
        Value::Object(entries) => {
            for (key, value) in entries.iter().filter(|(_, value)| !entry_ok(value)) {
                report.drop_entry(Some(key), DropReason::ShapeMismatch);
            }
        }
        _ => report.drop_entry(None, DropReason::ShapeMismatch),
    }
}

/// Normalize a key-to-pair scale, reporting dropped entries.
///
/// Duplicate canonical keys: the last entry wins and keeps the position of
/// the first.
pub fn normalise_pairs_with_report(
    input: &Value,
    key_normaliser: KeyNormaliser,
    slots: [Normaliser; 2],
) -> Normalised<NormalizedPair> {
    let mut report = Normalised::default();

    let Some(mapping) = parse_mapping(input) else {
        report_shape_mismatch(&mut report, input, crate::guard::is_processable_pair);
        return report;
    };

    for (raw_key, pair) in mapping {
        let Some(key) = key_normaliser(&raw_key).filter(|key| !key.is_empty()) else {
            report.drop_entry(Some(&raw_key), DropReason::KeyInvalid);
            continue;
        };

        let primary = slots[0](pair.0.as_deref(), None).filter(|v| !v.is_empty());
        let secondary = slots[1](pair.1.as_deref(), None).filter(|v| !v.is_empty());

        match (primary, secondary) {
            (Some(primary), Some(secondary)) => {
                report
                    .values
                    .insert(key, NormalizedPair(primary, secondary));
            }
            (None, _) => report.drop_entry(Some(&raw_key), DropReason::ValueUnrecognized { slot: 0 }),
            (_, None) => report.drop_entry(Some(&raw_key), DropReason::ValueUnrecognized { slot: 1 }),
        }
    }

    report
}

/// Normalize a key-to-pair scale.
pub fn normalise_pairs(
    input: &Value,
    key_normaliser: KeyNormaliser,
    slots: [Normaliser; 2],
) -> NormalizedMapping {
    normalise_pairs_with_report(input, key_normaliser, slots).values
}

/// Normalize a key-to-value scale, keeping non-empty keys as they are.
pub fn normalise_singles_with_report(input: &Value, normaliser: Normaliser) -> Normalised<String> {
    let mut report = Normalised::default();

    let Some(mapping) = parse_single_mapping(input) else {
        report_shape_mismatch(&mut report, input, crate::guard::is_processable_primitive);
        return report;
    };

    for (raw_key, raw) in mapping {
        let Some(key) = non_empty_key(&raw_key) else {
            report.drop_entry(Some(&raw_key), DropReason::KeyInvalid);
            continue;
        };
        match normaliser(raw.as_deref(), None).filter(|v| !v.is_empty()) {
            Some(value) => {
                report.values.insert(key, value);
            }
            None => report.drop_entry(Some(&raw_key), DropReason::ValueUnrecognized { slot: 0 }),
        }
    }

    report
}

/// Normalize a key-to-value scale.
pub fn normalise_singles(input: &Value, normaliser: Normaliser) -> IndexMap<String, String> {
    normalise_singles_with_report(input, normaliser).values
}

/// Normalize a `key -> [duration, distance]` scale.
///
/// Keys are spacing-scale numbers, durations are times and distances are
/// lengths or percentages.
pub fn normalise_values_with_report(input: &Value) -> Normalised<NormalizedPair> {
    normalise_pairs_with_report(
        input,
        normalise_numeric_key,
        [normalise_time_value, normalise_length_percentage_value],
    )
}

/// Normalize a `key -> [duration, distance]` scale.
pub fn normalise_values(input: &Value) -> NormalizedMapping {
    normalise_values_with_report(input).values
}
