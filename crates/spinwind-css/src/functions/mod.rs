//! Composers for multi-function CSS property values.
//!
//! Both composers accept untrusted, optional components and always return a
//! complete value: anything missing or unrecognized is replaced by the
//! matching `var(--tw-*)` reference.

mod dimension;
mod transform;
mod translate;

pub use dimension::normalise_dimension;
pub use transform::{
    normalise_function_values, TransformFunctionValues, DEFAULT_ROTATE_X, DEFAULT_ROTATE_Y,
    DEFAULT_SKEW_X, DEFAULT_SKEW_Y,
};
pub use translate::{
    normalise_translate_values, TranslateFunctionValues, DEFAULT_TRANSLATE_X,
    DEFAULT_TRANSLATE_Y, DEFAULT_TRANSLATE_Z,
};

use crate::css_value::Normaliser;

/// Normalize `raw`, or fall back to `default` when it is missing or rejected.
fn component_or_default(
    normaliser: Normaliser,
    component: &str,
    raw: Option<&str>,
    default: &str,
) -> String {
    match normaliser(raw, Some(default)) {
        Some(value) => value,
        None => {
            tracing::warn!(
                component,
                value = raw.unwrap_or_default(),
                fallback = default,
                "unrecognized function value, using fallback"
            );
            default.to_string()
        }
    }
}
