//! Shape guards for untrusted theme values.
//!
//! A theme scale arrives as arbitrary JSON. The `is_*` predicates decide
//! whether it has one of the expected shapes; the `parse_*` functions then
//! rebuild the typed value from scratch rather than trusting the predicate.
//! Both halves are pure and tested on their own.
//!
//! A slot is "absent" only when a typed value is built in code; from JSON
//! every slot must be a string. `null` is never accepted.

use indexmap::IndexMap;
use serde_json::Value;

/// A string or nothing.
pub type ProcessablePrimitive = Option<String>;

/// Two optional strings, e.g. `(duration, distance)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessablePair(pub ProcessablePrimitive, pub ProcessablePrimitive);

/// Scale key to pair, in first-seen order.
pub type ProcessableMapping = IndexMap<String, ProcessablePair>;

/// Scale key to single value, in first-seen order.
pub type ProcessableSingleMapping = IndexMap<String, ProcessablePrimitive>;

pub fn is_processable_primitive(value: &Value) -> bool {
    value.is_string()
}

pub fn is_processable_pair(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.len() == 2 && items.iter().all(is_processable_primitive),
        _ => false,
    }
}

pub fn is_processable_mapping(value: &Value) -> bool {
    match value {
        Value::Object(entries) => entries.values().all(is_processable_pair),
        _ => false,
    }
}

pub fn is_processable_single_mapping(value: &Value) -> bool {
    match value {
        Value::Object(entries) => entries.values().all(is_processable_primitive),
        _ => false,
    }
}

pub fn parse_primitive(value: &Value) -> Option<ProcessablePrimitive> {
    match value {
        Value::String(s) => Some(Some(s.clone())),
        _ => None,
    }
}

pub fn parse_pair(value: &Value) -> Option<ProcessablePair> {
    match value.as_array()?.as_slice() {
        [primary, secondary] => Some(ProcessablePair(
            parse_primitive(primary)?,
            parse_primitive(secondary)?,
        )),
        _ => None,
    }
}

/// Parse a key-to-pair mapping; any malformed value rejects the whole mapping.
pub fn parse_mapping(value: &Value) -> Option<ProcessableMapping> {
    if !is_processable_mapping(value) {
        return None;
    }
    value
        .as_object()?
        .iter()
        .map(|(key, pair)| Some((key.clone(), parse_pair(pair)?)))
        .collect()
}

/// Parse a key-to-string mapping; any malformed value rejects the whole mapping.
pub fn parse_single_mapping(value: &Value) -> Option<ProcessableSingleMapping> {
    if !is_processable_single_mapping(value) {
        return None;
    }
    value
        .as_object()?
        .iter()
        .map(|(key, single)| Some((key.clone(), parse_primitive(single)?)))
        .collect()
}
