//! Shared types for the spinwind workspace.
//!
//! Holds the error enums, the geometric tags (`Axis`, `Sign`, `Dimension`)
//! that flow through modifier derivation, the `CssObject` declaration tree
//! handed to hosts, and the `ThemeLookup` seam between the theme adapter
//! and the generators.

pub mod errors;
pub mod theme;
pub mod types;

pub use errors::{ConfigError, CssError, SpinwindError};
pub use theme::{lookup_path, ThemeLookup};
pub use types::{css_object, Axis, CssEntry, CssObject, Dimension, Sign};

pub type Result<T> = std::result::Result<T, SpinwindError>;
