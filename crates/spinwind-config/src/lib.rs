//! spinwind theme configuration.
//!
//! Provides the default design-token scales, config file loading (TOML,
//! YAML or JSON), and the defaults-plus-overrides merge that produces the
//! [`Theme`] the generators read through
//! [`ThemeLookup`](spinwind_common::ThemeLookup).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spinwind_common::ThemeLookup;
//! use spinwind_config::load_theme;
//!
//! let theme = load_theme(None).expect("failed to load theme");
//! println!("{:?}", theme.theme("bounceAndSpin.4"));
//! ```

pub mod defaults;
pub mod loader;
pub mod theme;
pub mod validation;

pub use defaults::{default_scales, BOUNCE_AND_SPIN_SCALE};
pub use loader::{create_default_config, default_config_path, load_default, load_from_path};
pub use theme::{Theme, ThemeFile, ThemeSection};

use spinwind_common::ConfigError;
use std::path::Path;

/// Load a config file and resolve it into a [`Theme`].
///
/// With no path the platform default location is used; a missing default
/// file yields the default theme.
pub fn load_theme(path: Option<&Path>) -> Result<Theme, ConfigError> {
    let file = match path {
        Some(path) => load_from_path(path)?,
        None => load_default()?,
    };
    Ok(Theme::merged(&file.theme))
}
