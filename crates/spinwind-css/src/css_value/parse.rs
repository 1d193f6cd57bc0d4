//! Internal numeric parsing helpers.
//!
//! Splits a raw CSS numeric value into its number and unit and re-prints the
//! number in shortest form. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a CSS number with an optional alphabetic or `%` unit.
///
/// The exponent branch needs digits, so `1em` reads as `1` + `em`.
pub(crate) static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)([a-zA-Z]*|%)$").unwrap()
});

/// A parsed numeric value: finite number plus lower-cased unit (possibly empty).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Numeric {
    pub number: f64,
    pub unit: String,
}

impl Numeric {
    pub fn is_zero(&self) -> bool {
        self.number == 0.0
    }

    /// Canonical text: shortest number followed by `unit`.
    pub fn with_unit(&self, unit: &str) -> String {
        format!("{}{unit}", format_number(self.number))
    }
}

/// Split a raw value into number and unit.
pub(crate) fn split_numeric(raw: &str) -> Option<Numeric> {
    let caps = NUMERIC_RE.captures(raw.trim())?;
    let number: f64 = caps[1].parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some(Numeric {
        number,
        unit: caps[2].to_ascii_lowercase(),
    })
}

/// Print a number the shortest way that reads back to the same value.
///
/// Negative zero prints as `0`.
pub(crate) fn format_number(number: f64) -> String {
    if number == 0.0 {
        return "0".to_string();
    }
    format!("{number}")
}
