mod cli;
mod commands;

use cli::Command;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "spinwind=info";

/// `--log-level` wins over `RUST_LOG`, which wins over the default.
fn env_filter(log_level: Option<&str>) -> EnvFilter {
    if let Some(directive) = log_level {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring invalid --log-level '{directive}': {e}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn run(command: Command) -> spinwind_common::Result<ExitCode> {
    match command {
        Command::Generate {
            config,
            format,
            output,
        } => commands::generate(config.as_deref(), format, output.as_deref())?,
        Command::Check { config } => {
            if !commands::check(config.as_deref())? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Init { path, force } => commands::init(path.as_deref(), force)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr so generated CSS on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("spinwind v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
