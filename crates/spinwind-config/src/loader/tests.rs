//! Tests for config loading, creation, and path resolution.

use super::*;
use serde_json::json;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_spinwind_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, spinwind_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinwind.toml");
    std::fs::write(
        &path,
        r#"
[theme.extend]
bounceAndSpin = { "4" = ["200ms", "1rem"] }
"#,
    )
    .unwrap();

    let file = load_from_path(&path).unwrap();
    assert!(file.theme.scales.is_empty());
    assert_eq!(
        file.theme.extend.get("bounceAndSpin"),
        Some(&json!({ "4": ["200ms", "1rem"] }))
    );
}

#[test]
fn load_yaml_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinwind.yaml");
    std::fs::write(
        &path,
        r#"
theme:
  rotate:
    "5": 5deg
  extend:
    skew:
      "45": 45deg
"#,
    )
    .unwrap();

    let file = load_from_path(&path).unwrap();
    assert_eq!(file.theme.scales.get("rotate"), Some(&json!({ "5": "5deg" })));
    assert_eq!(file.theme.extend.get("skew"), Some(&json!({ "45": "45deg" })));
}

#[test]
fn load_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinwind.json");
    std::fs::write(&path, r#"{ "theme": { "skew": { "1": "1deg" } } }"#).unwrap();

    let file = load_from_path(&path).unwrap();
    assert_eq!(file.theme.scales.get("skew"), Some(&json!({ "1": "1deg" })));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinwind.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, spinwind_common::ConfigError::ParseError(_)));
}

#[test]
fn load_structurally_invalid_config_still_returns_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinwind.toml");
    std::fs::write(&path, "[theme]\nrotate = 45\n").unwrap();

    let file = load_from_path(&path).unwrap();
    assert_eq!(file.theme.scales.get("rotate"), Some(&json!(45)));
}

#[test]
fn format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
    assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path(Path::new("noext")), ConfigFormat::Toml);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinwind").join("spinwind.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let file = load_from_path(&path).unwrap();
    assert!(file.theme.is_empty());
}

#[test]
fn default_config_template_is_valid() {
    use super::template::default_config_toml;

    let file = parse_config(default_config_toml(), ConfigFormat::Toml).unwrap();
    assert!(file.theme.is_empty());
    assert!(crate::validation::validate(&file).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // config_dir may be unavailable in sandboxed CI
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("spinwind"));
        assert_eq!(
            path.file_stem().and_then(|stem| stem.to_str()),
            Some(CONFIG_FILE_STEM)
        );
    }
}

#[test]
fn find_config_defaults_to_toml() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(find_config_in(dir.path()), dir.path().join("spinwind.toml"));
}

#[test]
fn find_config_picks_existing_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("spinwind.yml");
    std::fs::write(&yaml, "theme: {}\n").unwrap();
    assert_eq!(find_config_in(dir.path()), yaml);
}

#[test]
fn find_config_prefers_toml_over_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("spinwind.json"), "{}").unwrap();
    std::fs::write(dir.path().join("spinwind.toml"), "").unwrap();
    assert_eq!(find_config_in(dir.path()), dir.path().join("spinwind.toml"));
}

#[test]
fn create_default_config_rejects_non_toml_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinwind.json");
    let err = create_default_config(&path).unwrap_err();
    assert!(matches!(err, spinwind_common::ConfigError::ParseError(_)));
    assert!(!path.exists());
}
