//! CSS sanitization for generated declarations.
//!
//! Theme values reach the output verbatim once they pass normalization, and
//! user themes may override any scale, so every value and property name is
//! checked before emission.
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `eval(`, `@import`, `@charset`, `behavior:`, `-moz-binding`, `;`, `{`,
//! `}`, `<`, `>`

use spinwind_common::CssError;

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a declaration value, returning it trimmed.
pub fn sanitize_value(value: &str) -> Result<&str, CssError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(CssError::Empty);
    }

    check_injection_patterns(trimmed)?;

    Ok(trimmed)
}

/// Validate a kebab-case property name.
///
/// Accepts standard (`rotate`), vendor (`-webkit-transform`) and custom
/// (`--tw-rotate-z`) names.
pub fn validate_property(name: &str) -> Result<(), CssError> {
    let body = name.trim_start_matches('-');
    let dashes = name.len() - body.len();

    let valid = dashes <= 2
        && body
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
        && body
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');

    if valid {
        Ok(())
    } else {
        Err(CssError::InvalidIdentifier(name.to_string()))
    }
}

/// Validate a selector or keyframe step.
pub fn sanitize_selector(selector: &str) -> Result<&str, CssError> {
    sanitize_value(selector)
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check for common CSS injection patterns.
fn check_injection_patterns(value: &str) -> Result<(), CssError> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "@import",
        "@charset",
        "behavior:",
        "-moz-binding",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(CssError::Injection(pattern.to_string()));
        }
    }

    // Block structural characters that could escape the declaration
    for ch in [';', '{', '}', '<', '>'] {
        if value.contains(ch) {
            return Err(CssError::Injection(ch.to_string()));
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
