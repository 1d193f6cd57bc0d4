//! The `transform` function list.

use super::{component_or_default, normalise_dimension};
use crate::css_value::normalise_angle_value;
use spinwind_common::Dimension;

pub const DEFAULT_ROTATE_X: &str = "var(--tw-rotate-x)";
pub const DEFAULT_ROTATE_Y: &str = "var(--tw-rotate-y)";
pub const DEFAULT_SKEW_X: &str = "var(--tw-skew-x)";
pub const DEFAULT_SKEW_Y: &str = "var(--tw-skew-y)";

/// Optional, unvalidated inputs to [`normalise_function_values`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformFunctionValues<'a> {
    pub dimension: Option<&'a str>,
    pub rotate_x: Option<&'a str>,
    pub rotate_y: Option<&'a str>,
    pub skew_x: Option<&'a str>,
    pub skew_y: Option<&'a str>,
}

/// Compose the space-joined `transform` value.
///
/// `3d` emits `rotateX(..) rotateY(..)` ahead of the skew terms; `2d` leaves
/// the rotations out. Each angle defaults to its `--tw-*` variable.
pub fn normalise_function_values(values: &TransformFunctionValues<'_>) -> String {
    let angle = |component: &str, raw: Option<&str>, default: &str| {
        component_or_default(normalise_angle_value, component, raw, default)
    };

    let mut terms = Vec::with_capacity(4);
    if normalise_dimension(values.dimension) == Dimension::ThreeD {
        terms.push(format!(
            "rotateX({})",
            angle("rotateX", values.rotate_x, DEFAULT_ROTATE_X)
        ));
        terms.push(format!(
            "rotateY({})",
            angle("rotateY", values.rotate_y, DEFAULT_ROTATE_Y)
        ));
    }
    terms.push(format!("skewX({})", angle("skewX", values.skew_x, DEFAULT_SKEW_X)));
    terms.push(format!("skewY({})", angle("skewY", values.skew_y, DEFAULT_SKEW_Y)));
    terms.join(" ")
}
