//! The `bounce-and-spin` animation family.
//!
//! An element falls a theme-configured distance along one axis while
//! spinning a full turn around the same axis. Each `bounceAndSpin` entry
//! `key -> [duration, distance]` yields one keyframe set per axis and sign.

use crate::functions::{
    normalise_function_values, normalise_translate_values, TransformFunctionValues,
    TranslateFunctionValues,
};
use crate::modifiers::{derive, Derived, DerivedMap, ModifierOptions};
use crate::normalise::{normalise_values, NormalizedMapping, NormalizedPair};
use crate::plugin::{declarations, CssAnimation};
use indexmap::IndexMap;
use spinwind_common::{Axis, CssEntry, CssObject, ThemeLookup};
use spinwind_config::{default_scales, BOUNCE_AND_SPIN_SCALE};

const TIMING_FUNCTION: &str = "animationTimingFunction";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BounceAndSpin {
    options: ModifierOptions,
}

impl BounceAndSpin {
    pub const NAME: &'static str = "bounce-and-spin";

    pub fn new(options: ModifierOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ModifierOptions {
        &self.options
    }

    /// The normalized default `bounceAndSpin` scale.
    pub fn default_theme() -> NormalizedMapping {
        default_scales()
            .get(BOUNCE_AND_SPIN_SCALE)
            .map(normalise_values)
            .unwrap_or_default()
    }

    fn derived(&self, theme: &dyn ThemeLookup) -> DerivedMap<NormalizedPair> {
        let values = normalise_values(theme.scale(BOUNCE_AND_SPIN_SCALE));
        derive(values, Self::NAME, &self.options)
    }
}

impl CssAnimation for BounceAndSpin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn keyframes(&self, theme: &dyn ThemeLookup) -> CssObject {
        self.derived(theme)
            .iter()
            .filter_map(|(key, entry)| Some((key.clone(), keyframe_steps(entry)?.into())))
            .collect()
    }

    fn animation(&self, theme: &dyn ThemeLookup) -> IndexMap<String, String> {
        self.derived(theme)
            .into_iter()
            .map(|(key, entry)| {
                let shorthand = format!("{key} {} infinite", entry.value.primary());
                (key, shorthand)
            })
            .collect()
    }
}

/// `{ translate }` moving `value` along `axis`.
pub fn translate_declarations(axis: Axis, value: &str) -> CssObject {
    let translate = normalise_translate_values(&TranslateFunctionValues::along(axis, value));
    declarations([("translate", translate.into())])
}

/// Rotation by `value` around `axis`.
///
/// `z` uses the standalone `rotate` property; `x` and `y` go through the
/// transform function list, emitted twice with identical values.
pub fn rotate_declarations(axis: Axis, value: &str) -> CssObject {
    let values = match axis {
        Axis::Z => return declarations([("rotate", value.into())]),
        Axis::X => TransformFunctionValues {
            rotate_x: Some(value),
            ..Default::default()
        },
        Axis::Y => TransformFunctionValues {
            rotate_y: Some(value),
            ..Default::default()
        },
    };
    let transform = normalise_function_values(&values);
    declarations([
        ("--webkit-transform", transform.as_str().into()),
        ("transform", transform.into()),
    ])
}

fn step(mut declarations: CssObject, timing_function: &str) -> CssEntry {
    declarations.insert(TIMING_FUNCTION.to_string(), timing_function.into());
    CssEntry::Block(declarations)
}

/// The five keyframe steps of one derived entry. Duration is not used here.
fn keyframe_steps(entry: &Derived<NormalizedPair>) -> Option<CssObject> {
    let axis = entry.axis?;
    let sign = entry.sign;
    let distance = entry.value.secondary();

    Some(declarations([
        (
            "0%, 100%",
            step(translate_declarations(axis, "0"), "cubic-bezier(0, 0, 0.2, 1)"),
        ),
        ("0%, 5%", step(rotate_declarations(axis, "0deg"), "ease-in")),
        (
            "50%",
            step(
                translate_declarations(axis, &sign.apply(distance)),
                "cubic-bezier(0.8, 0, 1, 1)",
            ),
        ),
        (
            "50.1%",
            step(rotate_declarations(axis, &sign.apply("180deg")), "linear"),
        ),
        (
            "95%, 100%",
            step(rotate_declarations(axis, &sign.apply("360deg")), "ease-out"),
        ),
    ]))
}
