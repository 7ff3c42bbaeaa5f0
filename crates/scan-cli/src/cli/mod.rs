use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CatalogCommands, Commands, RankModeArg};

/// Top-level CLI parser for the `symptoscan` binary.
#[derive(Debug, Parser)]
#[command(
    name = "symptoscan",
    version,
    about = "SymptoScan - conversational symptom triage"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// How responses are printed (chat turns, rankings, catalog rows)
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max candidates or catalog rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Only log errors; also disables the spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log dialogue transitions and ranking scores
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding `.symptoscan/config.toml` and `.env` (defaults to cwd)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            config_dir: self.config_dir.clone(),
        }
    }
}
