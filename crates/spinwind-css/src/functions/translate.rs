//! The `translate` property value.

use super::{component_or_default, normalise_dimension};
use crate::css_value::normalise_length_percentage_value;
use spinwind_common::{Axis, Dimension};

pub const DEFAULT_TRANSLATE_X: &str = "var(--tw-translate-x)";
pub const DEFAULT_TRANSLATE_Y: &str = "var(--tw-translate-y)";
pub const DEFAULT_TRANSLATE_Z: &str = "var(--tw-translate-z)";

/// Optional, unvalidated inputs to [`normalise_translate_values`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateFunctionValues<'a> {
    pub dimension: Option<&'a str>,
    pub x: Option<&'a str>,
    pub y: Option<&'a str>,
    pub z: Option<&'a str>,
}

impl<'a> TranslateFunctionValues<'a> {
    /// Only the component on `axis` set.
    pub fn along(axis: Axis, value: &'a str) -> Self {
        let mut values = Self::default();
        match axis {
            Axis::X => values.x = Some(value),
            Axis::Y => values.y = Some(value),
            Axis::Z => values.z = Some(value),
        }
        values
    }
}

/// Compose the space-separated `translate` value: `x y z` in 3d, `x y` in 2d.
pub fn normalise_translate_values(values: &TranslateFunctionValues<'_>) -> String {
    let length = |component: &str, raw: Option<&str>, default: &str| {
        component_or_default(normalise_length_percentage_value, component, raw, default)
    };

    let mut components = vec![
        length("translateX", values.x, DEFAULT_TRANSLATE_X),
        length("translateY", values.y, DEFAULT_TRANSLATE_Y),
    ];
    if normalise_dimension(values.dimension) == Dimension::ThreeD {
        components.push(length("translateZ", values.z, DEFAULT_TRANSLATE_Z));
    }
    components.join(" ")
}
