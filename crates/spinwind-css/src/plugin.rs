//! Plugin surface.
//!
//! Generators talk to their host through [`PluginApi`]; the host owns the
//! theme and decides what to do with registered utilities. Animations do not
//! register anything: they contribute `keyframes` and `animation` entries to
//! the host's theme through [`Plugin::theme_extension`].

use crate::animations::BounceAndSpin;
use crate::utilities::Transform;
use indexmap::IndexMap;
use serde::Serialize;
use spinwind_common::{CssEntry, CssObject, ThemeLookup};

/// Turns one scale value into the declarations of a utility class.
pub type UtilityFn = Box<dyn Fn(&str) -> CssObject>;

/// Utility name to declaration builder, in registration order.
pub type UtilityTable = IndexMap<String, UtilityFn>;

/// How a [`UtilityTable`] is expanded by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchUtilitiesOptions {
    /// Scale key to canonical value.
    pub values: IndexMap<String, String>,
    /// Also emit `-{name}-{key}` classes with the negated value.
    pub supports_negative_values: bool,
}

/// What a host exposes to generators.
pub trait PluginApi: ThemeLookup {
    fn match_utilities(&mut self, utilities: UtilityTable, options: MatchUtilitiesOptions);
}

/// A keyframe animation family.
pub trait CssAnimation {
    fn name(&self) -> &str;

    /// Keyframe name to keyframe steps.
    fn keyframes(&self, theme: &dyn ThemeLookup) -> CssObject;

    /// Keyframe name to `animation` shorthand.
    fn animation(&self, theme: &dyn ThemeLookup) -> IndexMap<String, String>;
}

/// A family of utility classes.
pub trait CssUtility {
    fn name(&self) -> &str;

    fn utilities(&self, api: &mut dyn PluginApi);
}

/// Entries merged into the host theme's `keyframes` and `animation` scales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeExtension {
    pub keyframes: CssObject,
    pub animation: IndexMap<String, String>,
}

impl ThemeExtension {
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty() && self.animation.is_empty()
    }
}

/// A bundle of animations and utilities registered together.
pub struct Plugin {
    animations: Vec<Box<dyn CssAnimation>>,
    utilities: Vec<Box<dyn CssUtility>>,
}

impl Plugin {
    /// An empty plugin.
    pub fn new() -> Self {
        Self {
            animations: Vec::new(),
            utilities: Vec::new(),
        }
    }

    /// Every built-in animation and utility.
    pub fn builtin() -> Self {
        Self::new()
            .with_animation(BounceAndSpin::default())
            .with_utility(Transform)
    }

    pub fn with_animation(mut self, animation: impl CssAnimation + 'static) -> Self {
        self.animations.push(Box::new(animation));
        self
    }

    pub fn with_utility(mut self, utility: impl CssUtility + 'static) -> Self {
        self.utilities.push(Box::new(utility));
        self
    }

    pub fn animation_names(&self) -> impl Iterator<Item = &str> {
        self.animations.iter().map(|animation| animation.name())
    }

    pub fn utility_names(&self) -> impl Iterator<Item = &str> {
        self.utilities.iter().map(|utility| utility.name())
    }

    /// Collect every animation's keyframes and shorthands.
    ///
    /// A later animation producing an existing key replaces the earlier one.
    pub fn theme_extension(&self, theme: &dyn ThemeLookup) -> ThemeExtension {
        let mut extension = ThemeExtension::default();
        for animation in &self.animations {
            let keyframes = animation.keyframes(theme);
            let shorthands = animation.animation(theme);
            tracing::debug!(
                animation = animation.name(),
                keyframes = keyframes.len(),
                "collected animation"
            );
            extension.keyframes.extend(keyframes);
            extension.animation.extend(shorthands);
        }
        extension
    }

    /// Run every utility against `api`.
    pub fn register(&self, api: &mut dyn PluginApi) {
        for utility in &self.utilities {
            tracing::debug!(utility = utility.name(), "registering utilities");
            utility.utilities(api);
        }
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Declarations for a utility that only sets marker and value entries.
pub(crate) fn declarations<'a>(
    entries: impl IntoIterator<Item = (&'a str, CssEntry)>,
) -> CssObject {
    spinwind_common::css_object(entries)
}
