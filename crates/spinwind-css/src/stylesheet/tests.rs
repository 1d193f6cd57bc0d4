use super::*;
use serde_json::json;
use spinwind_common::CssEntry;

fn bounce_theme() -> Value {
    json!({
        "bounceAndSpin": { "4": ["200ms", "1rem"] },
        "rotate": { "0": "0deg", "45": "45deg", "DEFAULT": "90deg" },
        "skew": { "3": "3deg" },
    })
}

fn classes<T: ThemeLookup>(sheet: &StyleSheet<T>) -> Vec<&str> {
    sheet.rules().iter().map(|rule| rule.class.as_str()).collect()
}

fn declaration<'a, T: ThemeLookup>(sheet: &'a StyleSheet<T>, class: &str, property: &str) -> Option<&'a str> {
    sheet
        .rule(class)?
        .declarations
        .get(property)
        .and_then(CssEntry::as_value)
}

// --- match_utilities ---

#[test]
fn rotate_classes_with_negatives() {
    let sheet = StyleSheet::build(bounce_theme(), &Plugin::builtin());
    let classes = classes(&sheet);

    // zero has no negative counterpart
    assert!(classes.contains(&"rotate-0"));
    assert!(!classes.contains(&"-rotate-0"));

    assert!(classes.contains(&"rotate-45"));
    assert!(classes.contains(&"-rotate-45"));
    assert_eq!(declaration(&sheet, "-rotate-45", "--tw-rotate-z"), Some("-45deg"));
    assert_eq!(declaration(&sheet, "rotate-x-45", "--tw-rotate-x"), Some("45deg"));
    assert_eq!(declaration(&sheet, "-skew-y-3", "--tw-skew-y"), Some("-3deg"));
}

#[test]
fn default_key_uses_bare_name() {
    let sheet = StyleSheet::build(bounce_theme(), &Plugin::builtin());
    assert_eq!(declaration(&sheet, "rotate", "--tw-rotate-z"), Some("90deg"));
    assert_eq!(declaration(&sheet, "-rotate", "--tw-rotate-z"), Some("-90deg"));
    assert!(sheet.rule("rotate-DEFAULT").is_none());
}

#[test]
fn positive_rule_precedes_negative() {
    let sheet = StyleSheet::build(bounce_theme(), &Plugin::builtin());
    let classes = classes(&sheet);
    let positive = classes.iter().position(|c| *c == "skew-x-3").unwrap();
    let negative = classes.iter().position(|c| *c == "-skew-x-3").unwrap();
    assert_eq!(negative, positive + 1);
}

#[test]
fn negatives_only_when_supported() {
    let mut sheet = StyleSheet::new(json!({}));
    let mut table = UtilityTable::new();
    table.insert(
        "spin".into(),
        Box::new(|value: &str| css_object([("rotate", CssEntry::from(value))])),
    );
    sheet.match_utilities(
        table,
        MatchUtilitiesOptions {
            values: IndexMap::from([("45".to_string(), "45deg".to_string())]),
            supports_negative_values: false,
        },
    );
    assert_eq!(classes(&sheet), vec!["spin-45"]);
}

#[test]
fn negate_values() {
    assert_eq!(negate("45deg").as_deref(), Some("-45deg"));
    assert_eq!(negate("-45deg").as_deref(), Some("45deg"));
    assert_eq!(negate("0deg"), None);
    assert_eq!(negate("var(--x)").as_deref(), Some("calc(var(--x) * -1)"));
    assert_eq!(negate("auto"), None);
}

// --- to_css ---

#[test]
fn css_contains_keyframes_and_animation_classes() {
    let css = StyleSheet::build(bounce_theme(), &Plugin::builtin()).to_css();

    assert!(css.contains("@keyframes bounce-and-spin-x-4 {\n"));
    assert!(css.contains("@keyframes -bounce-and-spin-z-4 {\n"));
    assert!(css.contains("  50.1% {\n    rotate: -180deg;\n    animation-timing-function: linear;\n  }\n"));
    assert!(css.contains(
        ".animate-bounce-and-spin-y-4 {\n  animation: bounce-and-spin-y-4 200ms infinite;\n}\n"
    ));
    assert!(css.contains(".animate--bounce-and-spin-y-4 {\n"));
}

#[test]
fn css_keeps_webkit_transform_and_drops_markers() {
    let css = StyleSheet::build(bounce_theme(), &Plugin::builtin()).to_css();
    assert!(css.contains("--webkit-transform: rotateX(180deg)"));
    assert!(css.contains(".rotate-45 {\n  --tw-rotate-z: 45deg;\n  rotate: var(--tw-rotate-z);\n}\n"));
    assert!(!css.contains("@defaults"));
}

#[test]
fn css_escapes_fractional_keys() {
    let theme = json!({ "bounceAndSpin": { "0.5": ["566ms", "0.125rem"] } });
    let css = StyleSheet::build(theme, &Plugin::builtin()).to_css();
    assert!(css.contains("@keyframes bounce-and-spin-x-0\\.5 {"));
    assert!(css.contains("animation: bounce-and-spin-x-0\\.5 566ms infinite;"));
    assert!(css.contains(".animate-bounce-and-spin-x-0\\.5 {"));
}

#[test]
fn css_skips_rejected_declarations() {
    let mut sheet = StyleSheet::new(json!({}));
    let mut table = UtilityTable::new();
    table.insert(
        "evil".into(),
        Box::new(|value: &str| {
            css_object([
                ("color", CssEntry::from(value)),
                ("rotate", CssEntry::from("45deg")),
            ])
        }),
    );
    sheet.match_utilities(
        table,
        MatchUtilitiesOptions {
            values: IndexMap::from([("x".to_string(), "red; } body { color: red".to_string())]),
            supports_negative_values: true,
        },
    );

    let css = sheet.to_css();
    assert_eq!(css, ".evil-x {\n  rotate: 45deg;\n}\n");
}

#[test]
fn empty_sheet_renders_nothing() {
    let sheet = StyleSheet::new(json!({}));
    assert_eq!(sheet.to_css(), "");
}

#[test]
fn default_theme_renders_every_family() {
    let theme = spinwind_config::Theme::defaults();
    let sheet = StyleSheet::build(theme, &Plugin::builtin());
    let extension = sheet.theme_extension();
    assert_eq!(
        extension.keyframes.len(),
        crate::animations::BounceAndSpin::default_theme().len() * 6
    );
    assert!(sheet.rule("rotate-180").is_some());
    assert!(sheet.rule("-skew-x-12").is_some());
}

// --- to_json ---

#[test]
fn json_output_shape() {
    let json = StyleSheet::build(bounce_theme(), &Plugin::builtin())
        .to_json()
        .unwrap();

    assert_eq!(
        json["animation"]["-bounce-and-spin-x-4"],
        json!("-bounce-and-spin-x-4 200ms infinite")
    );
    assert_eq!(
        json["keyframes"]["bounce-and-spin-z-4"]["50%"]["animationTimingFunction"],
        json!("cubic-bezier(0.8, 0, 1, 1)")
    );
    assert_eq!(
        json["utilities"][".rotate-45"],
        json!({
            "@defaults transform": {},
            "--tw-rotate-z": "45deg",
            "rotate": "var(--tw-rotate-z)",
        })
    );
}

#[test]
fn theme_lookup_delegates() {
    let sheet = StyleSheet::new(bounce_theme());
    assert_eq!(sheet.theme("rotate.45"), Some(&json!("45deg")));
    assert_eq!(sheet.into_theme(), bounce_theme());
}
