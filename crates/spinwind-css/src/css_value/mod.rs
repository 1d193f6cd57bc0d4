//! CSS value canonicalizers.
//!
//! One normalizer per value category. Each takes an optional raw value and
//! an optional fallback and returns the canonical string, or `None` when the
//! raw value is not an instance of the category. They never fail any other
//! way: callers drop whatever comes back `None`.
//!
//! Canonical forms re-normalize to themselves.

mod parse;


pub(crate) use parse::split_numeric;

use parse::Numeric;

/// Shared normalizer signature: `(raw, fallback) -> canonical`.
pub type Normaliser = fn(Option<&str>, Option<&str>) -> Option<String>;

/// Length units accepted by [`normalise_length_percentage_value`].
pub const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "lh", "rlh", "vw", "vh", "vmin", "vmax", "svw", "svh", "lvw",
    "lvh", "dvw", "dvh", "cm", "mm", "q", "in", "pt", "pc",
];

/// Time units accepted by [`normalise_time_value`].
pub const TIME_UNITS: &[&str] = &["ms", "s"];

/// Angle units accepted by [`normalise_angle_value`].
pub const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

fn normalise_with(
    raw: Option<&str>,
    fallback: Option<&str>,
    canonicalize: impl FnOnce(Numeric) -> Option<String>,
) -> Option<String> {
    match raw {
        None => fallback.map(str::to_string),
        Some(raw) => split_numeric(raw).and_then(canonicalize),
    }
}

/// Canonicalize a unitless number (`"04"` → `"4"`).
pub fn normalise_number_value(raw: Option<&str>, fallback: Option<&str>) -> Option<String> {
    normalise_with(raw, fallback, |dim| {
        dim.unit.is_empty().then(|| dim.with_unit(""))
    })
}

/// Canonicalize a length or percentage; bare zero becomes `0px`.
pub fn normalise_length_percentage_value(
    raw: Option<&str>,
    fallback: Option<&str>,
) -> Option<String> {
    normalise_with(raw, fallback, |dim| match dim.unit.as_str() {
        "" if dim.is_zero() => Some(dim.with_unit("px")),
        "%" => Some(dim.with_unit("%")),
        unit if LENGTH_UNITS.contains(&unit) => Some(dim.with_unit(unit)),
        _ => None,
    })
}

/// Canonicalize a non-negative duration; bare numbers are milliseconds.
pub fn normalise_time_value(raw: Option<&str>, fallback: Option<&str>) -> Option<String> {
    normalise_with(raw, fallback, |dim| {
        if dim.number < 0.0 {
            return None;
        }
        match dim.unit.as_str() {
            "" => Some(dim.with_unit("ms")),
            unit if TIME_UNITS.contains(&unit) => Some(dim.with_unit(unit)),
            _ => None,
        }
    })
}

/// Canonicalize an angle; bare zero becomes `0deg`.
pub fn normalise_angle_value(raw: Option<&str>, fallback: Option<&str>) -> Option<String> {
    normalise_with(raw, fallback, |dim| match dim.unit.as_str() {
        "" if dim.is_zero() => Some(dim.with_unit("deg")),
        unit if ANGLE_UNITS.contains(&unit) => Some(dim.with_unit(unit)),
        _ => None,
    })
}
