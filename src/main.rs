use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wander::cli::commands::Cli;
use wander::cli::handlers;
use wander::io::config_io;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.log_file.as_deref(), cli.command.is_none()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        None => {
            // No subcommand → launch TUI
            config_io::load_config(cli.config.as_deref())
                .map_err(Into::into)
                .and_then(wander::tui::run)
        }
        Some(command) => handlers::dispatch(command, cli.json),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Subcommands log to stderr. The TUI owns the terminal, so it only logs to `--log-file`.
fn init_tracing(verbose: bool, log_file: Option<&Path>, tui: bool) -> Result<(), String> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("WANDER_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("cannot open log file '{}': {}", path.display(), e))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| format!("failed to initialize logging: {}", e))
        }
        None if tui => Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| format!("failed to initialize logging: {}", e)),
    }
}
