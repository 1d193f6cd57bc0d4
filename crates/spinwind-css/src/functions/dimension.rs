use spinwind_common::Dimension;

/// Read an optional `"2d"`/`"3d"` tag; anything else is `3d`.
pub fn normalise_dimension(raw: Option<&str>) -> Dimension {
    match raw {
        None => Dimension::default(),
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to 3d");
            Dimension::default()
        }),
    }
}
