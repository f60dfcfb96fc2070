use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mw", about = concat!("mw v", env!("CARGO_PKG_VERSION"), " - notice where your mind wanders"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug events (filter can also be set with WANDER_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log events to a file (the TUI only logs when this is set)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the trigger vocabulary
    Triggers,
    /// List the session components and the anchoring checklist
    Components,
    /// Apply a JSON Lines action script to a fresh page and print a summary
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, or - for stdin
    pub file: String,
}
