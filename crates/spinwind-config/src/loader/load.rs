//! Config loading and creation: read from a path or the platform default,
//! write the documented template.

use crate::theme::ThemeFile;
use crate::validation;
use spinwind_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::template::default_config_toml;

/// File stem looked up in the spinwind config directory.
pub const CONFIG_FILE_STEM: &str = "spinwind";

/// On-disk formats a config file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension; anything unknown is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    /// Extensions tried when resolving the default config, in priority order.
    pub const SEARCH_EXTENSIONS: [&'static str; 4] = ["toml", "yaml", "yml", "json"];
}

/// Directory holding spinwind's config files.
fn spinwind_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_STEM))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// The first existing `spinwind.{toml,yaml,yml,json}` in `dir`, or
/// `spinwind.toml` when none exists.
pub fn find_config_in(dir: &Path) -> PathBuf {
    ConfigFormat::SEARCH_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| dir.join(format!("{CONFIG_FILE_STEM}.toml")))
}

/// Platform-specific default config file path.
///
/// On Linux: `~/.config/spinwind/spinwind.toml`, or the YAML/JSON file
/// beside it when only that one exists.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let path = find_config_in(&spinwind_config_dir()?);
    debug!("default config path: {}", path.display());
    Ok(path)
}

/// Parse config file contents in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ThemeFile, ConfigError> {
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}"))),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse YAML: {e}"))),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}"))),
    }
}

/// Load a config file from a specific path.
///
/// Missing sections use serde defaults. A file that fails validation is
/// still returned; the generators drop whatever they cannot use.
pub fn load_from_path(path: &Path) -> Result<ThemeFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let file = parse_config(&content, ConfigFormat::from_path(path))?;

    if let Err(e) = validation::validate(&file) {
        warn!("config validation warning: {e}; malformed scales will be ignored");
    }

    info!("loaded config from {}", path.display());
    Ok(file)
}

/// Load config from [`default_config_path`].
///
/// A missing file is not an error: the defaults are used unchanged.
pub fn load_default() -> Result<ThemeFile, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(file) => Ok(file),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(ThemeFile::default())
        }
        Err(e) => Err(e),
    }
}

/// Write the documented TOML template to `path`, creating parent directories.
///
/// The template is TOML only; `.yaml`/`.json` targets are rejected.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let format = ConfigFormat::from_path(path);
    if format != ConfigFormat::Toml {
        return Err(ConfigError::ParseError(format!(
            "the config template is TOML, cannot write {format:?} to {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
