//! Derived CSS generation for spinwind.
//!
//! Theme scales arrive as untrusted JSON. They are shape-checked
//! ([`guard`]), canonicalized ([`css_value`], [`normalise`]), expanded into
//! axis/sign variants ([`modifiers`]) and turned into declaration trees by
//! the animation and utility families. A [`Plugin`] bundles the families;
//! any [`PluginApi`] host can consume them, and [`StyleSheet`] renders them
//! to CSS.
//!
//! # Quick Start
//!
//! ```rust
//! use spinwind_config::Theme;
//! use spinwind_css::{Plugin, StyleSheet};
//!
//! let sheet = StyleSheet::build(Theme::defaults(), &Plugin::builtin());
//! assert!(sheet.to_css().contains("@keyframes bounce-and-spin-x-4"));
//! ```

pub mod animations;
pub mod css_value;
pub mod functions;
pub mod guard;
pub mod modifiers;
pub mod normalise;
pub mod plugin;
pub mod stylesheet;
pub mod utilities;

pub use animations::BounceAndSpin;
pub use css_value::{
    normalise_angle_value, normalise_length_percentage_value, normalise_number_value,
    normalise_time_value, Normaliser,
};
pub use modifiers::{derive, Derived, DerivedMap, ModifierOptions, NegativeMarker};
pub use normalise::{
    normalise_values, normalise_values_with_report, DropReason, DroppedEntry, Normalised,
    NormalizedMapping, NormalizedPair,
};
pub use plugin::{
    CssAnimation, CssUtility, MatchUtilitiesOptions, Plugin, PluginApi, ThemeExtension, UtilityFn,
    UtilityTable,
};
pub use stylesheet::{StyleSheet, UtilityRule};
pub use utilities::Transform;
