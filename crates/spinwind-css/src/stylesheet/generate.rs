//! CSS text generation.
//!
//! Declaration trees are sanitized first (rejected entries are skipped with
//! a warning), then written out with kebab-case property names and escaped
//! identifiers.

use super::sanitize::{sanitize_selector, sanitize_value, validate_property};
use spinwind_common::{CssEntry, CssObject};
use std::fmt::Write;

const INDENT: &str = "  ";

// =============================================================================
// SANITIZATION
// =============================================================================

/// Copy `object`, dropping every entry the sanitizer rejects.
///
/// Keys of nested blocks are checked as selectors, keys of leaf values as
/// property names. `context` names the rule in log output.
pub fn sanitize_object(object: &CssObject, context: &str) -> CssObject {
    let mut clean = CssObject::with_capacity(object.len());

    for (key, entry) in object {
        let checked = match entry {
            CssEntry::Value(value) => validate_property(&property_name(key))
                .and_then(|()| sanitize_value(value))
                .map(|value| CssEntry::Value(value.to_string())),
            CssEntry::Block(block) => sanitize_selector(key)
                .map(|_| CssEntry::Block(sanitize_object(block, context))),
        };

        match checked {
            Ok(entry) => {
                clean.insert(key.clone(), entry);
            }
            Err(e) => {
                tracing::warn!(
                    rule = context,
                    name = %key,
                    error = %e,
                    "Declaration rejected by sanitizer"
                );
            }
        }
    }

    clean
}

// =============================================================================
// NAMES
// =============================================================================

/// Convert a camelCase property to kebab-case (`animationTimingFunction` →
/// `animation-timing-function`). Custom properties are left alone.
pub fn property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut kebab = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(ch.to_ascii_lowercase());
        } else {
            kebab.push(ch);
        }
    }
    kebab
}

/// Escape a class name or keyframe name for use as a CSS identifier.
pub fn escape_ident(raw: &str) -> String {
    let first = raw.chars().next();
    let mut escaped = String::with_capacity(raw.len() + 4);

    for (index, ch) in raw.chars().enumerate() {
        let leading_digit = ch.is_ascii_digit()
            && (index == 0 || (index == 1 && first == Some('-')));

        if ch == '\0' {
            escaped.push('\u{FFFD}');
        } else if ch.is_ascii_control() || leading_digit {
            let _ = write!(escaped, "\\{:x} ", ch as u32);
        } else if index == 0 && ch == '-' && raw.len() == 1 {
            escaped.push_str("\\-");
        } else if !ch.is_ascii() || ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            escaped.push(ch);
        } else {
            escaped.push('\\');
            escaped.push(ch);
        }
    }

    escaped
}

// =============================================================================
// RULES
// =============================================================================

/// Write `selector { .. }` with already-sanitized declarations.
///
/// Empty `@` markers (such as `@defaults transform`) are omitted; other
/// nested blocks are written as nested rules. A rule with nothing to emit is
/// skipped entirely.
pub fn write_rule(out: &mut String, selector: &str, declarations: &CssObject, depth: usize) {
    let mut body = String::new();

    for (key, entry) in declarations {
        match entry {
            CssEntry::Value(value) => {
                let _ = writeln!(
                    body,
                    "{}{}: {value};",
                    INDENT.repeat(depth + 1),
                    property_name(key)
                );
            }
            CssEntry::Block(block) if key.starts_with('@') && block.is_empty() => {}
            CssEntry::Block(block) => write_rule(&mut body, key, block, depth + 1),
        }
    }

    if body.is_empty() {
        return;
    }

    let indent = INDENT.repeat(depth);
    let _ = writeln!(out, "{indent}{selector} {{");
    out.push_str(&body);
    let _ = writeln!(out, "{indent}}}");
}

/// Write an `@keyframes` rule.
pub fn write_keyframes(out: &mut String, name: &str, steps: &CssObject) {
    write_rule(out, &format!("@keyframes {}", escape_ident(name)), steps, 0);
}

/// Escape the leading animation name of an `animation` shorthand.
pub fn escape_animation(name: &str, shorthand: &str) -> String {
    match shorthand.strip_prefix(name) {
        Some(rest) => format!("{}{rest}", escape_ident(name)),
        None => shorthand.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
