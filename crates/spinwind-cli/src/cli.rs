use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// spinwind: bounce-and-spin keyframes and transform utilities from a theme.
#[derive(Parser, Debug)]
#[command(name = "spinwind", version, about)]
pub struct Args {
    /// Log directive override (e.g. `debug`, `spinwind=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate CSS (or JSON declaration trees) from the theme.
    Generate {
        /// Config file path override.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,

        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List theme entries that would be dropped, with reasons.
    Check {
        /// Config file path override.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a documented config template.
    Init {
        /// Where to write it (defaults to the platform config directory).
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Css,
    Json,
}

pub fn parse() -> Args {
    Args::parse()
}
