//! Default theme scales.
//!
//! The default theme is built once on first access and never mutated; the
//! `bounceAndSpin` scale is derived from the spacing table.

mod gravity;
mod tables;

pub use gravity::{
    add_duration_with_gravity, bounce_duration_ms, GRAVITY_PX_PER_MS2, ROOT_FONT_SIZE_PX,
};
pub use tables::{ROTATE, SKEW, SPACING};

use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Scale name read by the bounce-and-spin animation family.
pub const BOUNCE_AND_SPIN_SCALE: &str = "bounceAndSpin";

static DEFAULT_SCALES: LazyLock<Map<String, Value>> = LazyLock::new(|| {
    let spacing = table_to_map(SPACING);
    let bounce_and_spin = add_duration_with_gravity(&spacing);

    let mut scales = Map::new();
    scales.insert("spacing".into(), Value::Object(spacing));
    scales.insert("rotate".into(), Value::Object(table_to_map(ROTATE)));
    scales.insert("skew".into(), Value::Object(table_to_map(SKEW)));
    scales.insert(
        BOUNCE_AND_SPIN_SCALE.into(),
        Value::Object(bounce_and_spin),
    );
    tracing::debug!(scales = scales.len(), "built default theme");
    scales
});

/// The default scales, keyed by scale name.
pub fn default_scales() -> &'static Map<String, Value> {
    &DEFAULT_SCALES
}

fn table_to_map(table: &[(&str, &str)]) -> Map<String, Value> {
    table
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}
