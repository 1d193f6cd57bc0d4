//! Duration derivation for bounce distances.
//!
//! A bounce of height `d` takes `2 * sqrt(2d / g)`: the fall time there and
//! back. Durations are whole milliseconds.

use serde_json::{json, Map, Value};

/// Gravity in px/ms².
pub const GRAVITY_PX_PER_MS2: f64 = 0.0001;

/// Root font size used to resolve `rem` distances.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Resolve a `px` or `rem` length to pixels.
fn distance_in_px(distance: &str) -> Option<f64> {
    let distance = distance.trim();
    if let Some(rem) = distance.strip_suffix("rem") {
        return rem.parse::<f64>().ok().map(|r| r * ROOT_FONT_SIZE_PX);
    }
    distance.strip_suffix("px")?.parse::<f64>().ok()
}

/// Bounce cycle duration in milliseconds for a distance in pixels.
pub fn bounce_duration_ms(px: f64) -> u64 {
    let fall = (2.0 * px / GRAVITY_PX_PER_MS2).sqrt();
    (2.0 * fall).round() as u64
}

/// Pair every spacing entry with the duration of a bounce of that height.
///
/// Produces `key -> [duration, distance]`. Distances that are zero, negative
/// or not in `px`/`rem` have no meaningful fall time and are skipped.
pub fn add_duration_with_gravity(spacing: &Map<String, Value>) -> Map<String, Value> {
    spacing
        .iter()
        .filter_map(|(key, value)| {
            let distance = value.as_str()?;
            let px = distance_in_px(distance)?;
            if !px.is_finite() || px <= 0.0 {
                return None;
            }
            let duration = format!("{}ms", bounce_duration_ms(px));
            Some((key.clone(), json!([duration, distance])))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing(entries: &[(&str, &str)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn distance_in_px_handles_rem_and_px() {
        assert_eq!(distance_in_px("1rem"), Some(16.0));
        assert_eq!(distance_in_px("0.125rem"), Some(2.0));
        assert_eq!(distance_in_px("3px"), Some(3.0));
        assert_eq!(distance_in_px("50%"), None);
        assert_eq!(distance_in_px("auto"), None);
    }

    #[test]
    fn duration_grows_with_distance() {
        assert_eq!(bounce_duration_ms(2.0), 400);
        assert_eq!(bounce_duration_ms(16.0), 1131);
        assert_eq!(bounce_duration_ms(32.0), 1600);
    }

    #[test]
    fn pairs_duration_with_distance() {
        let derived = add_duration_with_gravity(&spacing(&[("4", "1rem"), ("8", "2rem")]));
        assert_eq!(derived.get("4"), Some(&json!(["1131ms", "1rem"])));
        assert_eq!(derived.get("8"), Some(&json!(["1600ms", "2rem"])));
    }

    #[test]
    fn skips_zero_and_unresolvable_distances() {
        let derived = add_duration_with_gravity(&spacing(&[
            ("0", "0px"),
            ("full", "100%"),
            ("1", "0.25rem"),
        ]));
        assert_eq!(derived.len(), 1);
        assert_eq!(derived.get("1"), Some(&json!(["566ms", "0.25rem"])));
    }

    #[test]
    fn skips_non_string_values() {
        let mut input = Map::new();
        input.insert("4".into(), json!(16));
        assert!(add_duration_with_gravity(&input).is_empty());
    }

    #[test]
    fn preserves_spacing_order() {
        let derived = add_duration_with_gravity(&spacing(&[
            ("8", "2rem"),
            ("1", "0.25rem"),
            ("4", "1rem"),
        ]));
        let keys: Vec<&str> = derived.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["8", "1", "4"]);
    }
}
