//! Theme resolution: default scales merged with user overrides.

mod merge;
mod types;

pub use merge::Theme;
pub use types::{ThemeFile, ThemeSection};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};
    use spinwind_common::ThemeLookup;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn defaults_expose_all_scales() {
        let theme = Theme::defaults();
        assert!(theme.theme("spacing").is_some());
        assert!(theme.theme("rotate").is_some());
        assert!(theme.theme("skew").is_some());
        assert!(theme.theme("bounceAndSpin").is_some());
        assert_eq!(theme.theme("spacing.4"), Some(&json!("1rem")));
    }

    #[test]
    fn top_level_scale_replaces_default() {
        let section = ThemeSection {
            scales: object(json!({ "rotate": { "5": "5deg" } })),
            ..Default::default()
        };
        let theme = Theme::merged(&section);
        assert_eq!(theme.scale("rotate"), &json!({ "5": "5deg" }));
        // untouched scales keep their defaults
        assert_eq!(theme.theme("skew.12"), Some(&json!("12deg")));
    }

    #[test]
    fn extend_merges_into_default() {
        let section = ThemeSection {
            extend: object(json!({ "rotate": { "270": "270deg", "45": "50deg" } })),
            ..Default::default()
        };
        let theme = Theme::merged(&section);
        let rotate = theme.scale("rotate").as_object().unwrap();
        assert_eq!(rotate.get("270"), Some(&json!("270deg")));
        assert_eq!(rotate.get("45"), Some(&json!("50deg")));
        assert_eq!(rotate.get("90"), Some(&json!("90deg")));
    }

    #[test]
    fn extend_keeps_position_of_overridden_keys() {
        let section = ThemeSection {
            extend: object(json!({ "skew": { "0": "1deg" } })),
            ..Default::default()
        };
        let theme = Theme::merged(&section);
        let first = theme.scale("skew").as_object().unwrap().iter().next();
        assert_eq!(first, Some((&"0".to_string(), &json!("1deg"))));
    }

    #[test]
    fn extend_unknown_scale_inserts_it() {
        let section = ThemeSection {
            extend: object(json!({ "wobble": { "1": "1deg" } })),
            ..Default::default()
        };
        let theme = Theme::merged(&section);
        assert_eq!(theme.scale("wobble"), &json!({ "1": "1deg" }));
    }

    #[test]
    fn extend_with_non_table_replaces() {
        let section = ThemeSection {
            extend: object(json!({ "rotate": "nope" })),
            ..Default::default()
        };
        let theme = Theme::merged(&section);
        assert_eq!(theme.scale("rotate"), &json!("nope"));
    }

    #[test]
    fn replace_then_extend_in_same_section() {
        let section = ThemeSection {
            scales: object(json!({ "skew": { "1": "1deg" } })),
            extend: object(json!({ "skew": { "2": "2deg" } })),
        };
        let theme = Theme::merged(&section);
        assert_eq!(theme.scale("skew"), &json!({ "1": "1deg", "2": "2deg" }));
    }

    #[test]
    fn empty_section_changes_nothing() {
        let theme = Theme::merged(&ThemeSection::default());
        assert_eq!(theme, Theme::defaults());
        assert!(ThemeSection::default().is_empty());
    }

    #[test]
    fn theme_file_parses_from_toml() {
        let file: ThemeFile = toml::from_str(
            r#"
[theme]
rotate = { "5" = "5deg" }

[theme.extend]
bounceAndSpin = { "4" = ["200ms", "1rem"] }
"#,
        )
        .unwrap();
        assert_eq!(file.theme.scales.get("rotate"), Some(&json!({ "5": "5deg" })));
        assert!(file.theme.scales.get("extend").is_none());
        assert_eq!(
            file.theme.extend.get("bounceAndSpin"),
            Some(&json!({ "4": ["200ms", "1rem"] }))
        );
    }

    #[test]
    fn theme_serializes_as_plain_object() {
        let theme = Theme::from_scales(object(json!({ "rotate": { "1": "1deg" } })));
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json, json!({ "rotate": { "1": "1deg" } }));
        assert_eq!(theme.into_value(), json);
    }
}
