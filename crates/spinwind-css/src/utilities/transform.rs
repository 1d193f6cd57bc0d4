//! Rotation and skew utilities.
//!
//! `rotate`/`rotate-z` use the standalone `rotate` property; `rotate-x`,
//! `rotate-y`, `skew-x` and `skew-y` set their `--tw-*` variable and the full
//! transform function list so the variables compose.

use crate::css_value::normalise_angle_value;
use crate::functions::{normalise_function_values, TransformFunctionValues};
use crate::normalise::normalise_singles;
use crate::plugin::{
    declarations, CssUtility, MatchUtilitiesOptions, PluginApi, UtilityFn, UtilityTable,
};
use spinwind_common::{CssEntry, CssObject};

const DEFAULTS_MARKER: &str = "@defaults transform";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform;

impl Transform {
    pub const NAME: &'static str = "transform";
}

impl CssUtility for Transform {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn utilities(&self, api: &mut dyn PluginApi) {
        let function_values = normalise_function_values(&TransformFunctionValues::default());
        let rotate_values = normalise_singles(api.scale("rotate"), normalise_angle_value);
        let skew_values = normalise_singles(api.scale("skew"), normalise_angle_value);

        let rotate: UtilityTable = [
            ("rotate", rotate_z()),
            ("rotate-x", with_transform("--tw-rotate-x", &function_values)),
            ("rotate-y", with_transform("--tw-rotate-y", &function_values)),
            ("rotate-z", rotate_z()),
        ]
        .into_iter()
        .map(|(name, build)| (name.to_string(), build))
        .collect();
        api.match_utilities(
            rotate,
            MatchUtilitiesOptions {
                values: rotate_values,
                supports_negative_values: true,
            },
        );

        let skew: UtilityTable = [
            ("skew-x", with_transform("--tw-skew-x", &function_values)),
            ("skew-y", with_transform("--tw-skew-y", &function_values)),
        ]
        .into_iter()
        .map(|(name, build)| (name.to_string(), build))
        .collect();
        api.match_utilities(
            skew,
            MatchUtilitiesOptions {
                values: skew_values,
                supports_negative_values: true,
            },
        );
    }
}

fn rotate_z() -> UtilityFn {
    Box::new(|value: &str| {
        declarations([
            (DEFAULTS_MARKER, CssEntry::empty_block()),
            ("--tw-rotate-z", value.into()),
            ("rotate", "var(--tw-rotate-z)".into()),
        ])
    })
}

fn with_transform(variable: &'static str, function_values: &str) -> UtilityFn {
    let function_values = function_values.to_string();
    Box::new(move |value: &str| -> CssObject {
        declarations([
            (DEFAULTS_MARKER, CssEntry::empty_block()),
            (variable, value.into()),
            ("transform", function_values.as_str().into()),
        ])
    })
}
