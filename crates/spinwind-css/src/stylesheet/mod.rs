//! Reference plugin host.
//!
//! [`StyleSheet`] implements [`PluginApi`] over any [`ThemeLookup`]: it
//! expands registered utilities into class rules, collects animation theme
//! extensions, and renders everything to CSS text or JSON. All output passes
//! through the sanitizer.

mod generate;
mod sanitize;

#[cfg(test)]
mod tests;

pub use generate::{escape_ident, property_name};
pub use sanitize::{sanitize_value, validate_property};

use crate::css_value::split_numeric;
use crate::plugin::{MatchUtilitiesOptions, Plugin, PluginApi, ThemeExtension, UtilityTable};
use generate::{escape_animation, sanitize_object, write_keyframes, write_rule};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use spinwind_common::{css_object, CssEntry, CssObject, Sign, SpinwindError, ThemeLookup};

/// Scale key rendered as the bare utility name.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// One generated utility class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilityRule {
    /// Unescaped class name, without the leading `.`.
    pub class: String,
    pub declarations: CssObject,
}

impl UtilityRule {
    pub fn selector(&self) -> String {
        format!(".{}", escape_ident(&self.class))
    }
}

#[derive(Serialize)]
struct StyleSheetJson {
    keyframes: CssObject,
    animation: IndexMap<String, String>,
    utilities: IndexMap<String, CssObject>,
}

pub struct StyleSheet<T> {
    theme: T,
    extension: ThemeExtension,
    rules: Vec<UtilityRule>,
}

impl<T: ThemeLookup> StyleSheet<T> {
    pub fn new(theme: T) -> Self {
        Self {
            theme,
            extension: ThemeExtension::default(),
            rules: Vec::new(),
        }
    }

    /// Apply every part of `plugin` to a fresh sheet over `theme`.
    pub fn build(theme: T, plugin: &Plugin) -> Self {
        let mut sheet = Self::new(theme);
        let extension = plugin.theme_extension(&sheet.theme);
        sheet.add_theme_extension(extension);
        plugin.register(&mut sheet);
        tracing::debug!(
            keyframes = sheet.extension.keyframes.len(),
            utilities = sheet.rules.len(),
            "built stylesheet"
        );
        sheet
    }

    /// Merge keyframes and animation shorthands; existing keys are replaced.
    pub fn add_theme_extension(&mut self, extension: ThemeExtension) {
        self.extension.keyframes.extend(extension.keyframes);
        self.extension.animation.extend(extension.animation);
    }

    pub fn theme_extension(&self) -> &ThemeExtension {
        &self.extension
    }

    pub fn rules(&self) -> &[UtilityRule] {
        &self.rules
    }

    pub fn rule(&self, class: &str) -> Option<&UtilityRule> {
        self.rules.iter().find(|rule| rule.class == class)
    }

    pub fn into_theme(self) -> T {
        self.theme
    }

    /// Render keyframes, `.animate-*` classes and utility classes.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (name, steps) in &self.extension.keyframes {
            let Some(steps) = steps.as_block() else {
                tracing::warn!(keyframes = %name, "keyframes entry is not a block, skipping");
                continue;
            };
            write_keyframes(&mut css, name, &sanitize_object(steps, name));
        }

        for (name, shorthand) in &self.extension.animation {
            let class = format!("animate-{name}");
            let declarations = css_object([(
                "animation",
                CssEntry::Value(escape_animation(name, shorthand)),
            )]);
            write_rule(
                &mut css,
                &format!(".{}", escape_ident(&class)),
                &sanitize_object(&declarations, &class),
                0,
            );
        }

        for rule in &self.rules {
            write_rule(
                &mut css,
                &rule.selector(),
                &sanitize_object(&rule.declarations, &rule.class),
                0,
            );
        }

        css
    }

    /// The sanitized declaration trees as JSON, keyed by selector for utilities.
    pub fn to_json(&self) -> Result<Value, SpinwindError> {
        let keyframes: CssObject = self
            .extension
            .keyframes
            .iter()
            .filter_map(|(name, steps)| {
                let steps = steps.as_block()?;
                Some((name.clone(), sanitize_object(steps, name).into()))
            })
            .collect();
        let utilities: IndexMap<String, CssObject> = self
            .rules
            .iter()
            .map(|rule| {
                (
                    rule.selector(),
                    sanitize_object(&rule.declarations, &rule.class),
                )
            })
            .collect();
        let animation: IndexMap<String, String> = self
            .extension
            .animation
            .iter()
            .filter_map(|(name, shorthand)| match sanitize_value(shorthand) {
                Ok(value) => Some((name.clone(), value.to_string())),
                Err(e) => {
                    tracing::warn!(
                        animation = %name,
                        error = %e,
                        "Animation rejected by sanitizer"
                    );
                    None
                }
            })
            .collect();

        let json = StyleSheetJson {
            keyframes,
            animation,
            utilities,
        };
        serde_json::to_value(json).map_err(|e| SpinwindError::Serialize(e.to_string()))
    }
}

impl<T: ThemeLookup> ThemeLookup for StyleSheet<T> {
    fn theme(&self, path: &str) -> Option<&Value> {
        self.theme.theme(path)
    }
}

impl<T: ThemeLookup> PluginApi for StyleSheet<T> {
    fn match_utilities(&mut self, utilities: UtilityTable, options: MatchUtilitiesOptions) {
        for (name, build) in &utilities {
            for (key, value) in &options.values {
                let class = if key == DEFAULT_KEY {
                    name.clone()
                } else {
                    format!("{name}-{key}")
                };

                let negated = if options.supports_negative_values {
                    negate(value)
                } else {
                    None
                };

                self.rules.push(UtilityRule {
                    class: class.clone(),
                    declarations: build(value.as_str()),
                });
                if let Some(negated) = negated {
                    self.rules.push(UtilityRule {
                        class: format!("-{class}"),
                        declarations: build(negated.as_str()),
                    });
                }
            }
        }
    }
}

/// The negative counterpart of a utility value, if it has one.
///
/// Zero has none; `var()`/`calc()` references are wrapped in `calc(.. * -1)`;
/// anything else that is not numeric is left without a negative class.
fn negate(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(numeric) = split_numeric(value) {
        return (!numeric.is_zero()).then(|| Sign::Negative.apply(value));
    }
    (value.starts_with("var(") || value.starts_with("calc("))
        .then(|| format!("calc({value} * -1)"))
}
