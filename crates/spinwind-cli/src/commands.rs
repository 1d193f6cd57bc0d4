//! Subcommand implementations.

use crate::cli::OutputFormat;
use spinwind_common::{Result, SpinwindError, ThemeLookup};
use spinwind_config::{create_default_config, default_config_path, load_theme, Theme};
use spinwind_css::normalise::normalise_singles_with_report;
use spinwind_css::{
    normalise_angle_value, normalise_values_with_report, DroppedEntry, Plugin, StyleSheet,
};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use tracing::info;

/// Scales read by the built-in families.
const AUDITED_SCALES: &[&str] = &[spinwind_config::BOUNCE_AND_SPIN_SCALE, "rotate", "skew"];

pub fn generate(config: Option<&Path>, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let theme = load_theme(config)?;
    let sheet = StyleSheet::build(theme, &Plugin::builtin());

    let rendered = match format {
        OutputFormat::Css => sheet.to_css(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&sheet.to_json()?)
                .map_err(|e| SpinwindError::Serialize(e.to_string()))?;
            json.push('\n');
            json
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(
                rules = sheet.rules().len(),
                keyframes = sheet.theme_extension().keyframes.len(),
                "wrote {}",
                path.display()
            );
        }
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Entries dropped from one scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleReport {
    pub scale: &'static str,
    pub kept: usize,
    pub dropped: Vec<DroppedEntry>,
}

/// Normalize every audited scale and collect what was dropped.
pub fn audit(theme: &dyn ThemeLookup) -> Vec<ScaleReport> {
    AUDITED_SCALES
        .iter()
        .map(|&scale| {
            let input = theme.scale(scale);
            let (kept, dropped) = if scale == spinwind_config::BOUNCE_AND_SPIN_SCALE {
                let report = normalise_values_with_report(input);
                (report.values.len(), report.dropped)
            } else {
                let report = normalise_singles_with_report(input, normalise_angle_value);
                (report.values.len(), report.dropped)
            };
            ScaleReport {
                scale,
                kept,
                dropped,
            }
        })
        .collect()
}

/// Drops that the default theme does not already have.
pub fn introduced_drops(reports: &[ScaleReport], baseline: &[ScaleReport]) -> Vec<ScaleReport> {
    reports
        .iter()
        .map(|report| {
            let expected = baseline
                .iter()
                .find(|base| base.scale == report.scale)
                .map(|base| base.dropped.as_slice())
                .unwrap_or_default();
            ScaleReport {
                dropped: report
                    .dropped
                    .iter()
                    .filter(|entry| !expected.contains(entry))
                    .cloned()
                    .collect(),
                ..report.clone()
            }
        })
        .collect()
}

pub fn format_reports(reports: &[ScaleReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "{}: {} kept, {} dropped",
            report.scale,
            report.kept,
            report.dropped.len()
        );
        for entry in &report.dropped {
            let key = entry.key.as_deref().unwrap_or("<scale>");
            let _ = writeln!(out, "  {key}: {}", entry.reason);
        }
    }
    out
}

/// Print the audit of the configured theme. Returns `false` when the config
/// caused entries to be dropped.
pub fn check(config: Option<&Path>) -> Result<bool> {
    let theme = load_theme(config)?;
    let reports = introduced_drops(&audit(&theme), &audit(&Theme::defaults()));
    std::io::stdout().write_all(format_reports(&reports).as_bytes())?;
    Ok(reports.iter().all(|report| report.dropped.is_empty()))
}

pub fn init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };

    if path.exists() && !force {
        return Err(SpinwindError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    create_default_config(&path)?;
    println!("{}", path.display());
    Ok(())
}
