//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# spinwind configuration
# Only override what you want to change -- missing scales use defaults.

# Scales written here replace the default scale entirely.
[theme]
# rotate = { "0" = "0deg", "45" = "45deg", "90" = "90deg", "180" = "180deg" }
# skew = { "0" = "0deg", "3" = "3deg", "6" = "6deg" }

# Scales written here are merged into the default scale.
[theme.extend]
# Keys are spacing-scale numbers, values are [duration, distance].
# Durations take ms/s (bare numbers are read as ms); distances need a
# length unit or a percentage.
# bounceAndSpin = { "4" = ["200ms", "1rem"], "8" = ["1.6s", "2rem"] }
# rotate = { "270" = "270deg" }
"##
}
