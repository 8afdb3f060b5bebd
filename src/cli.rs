use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mc-instance-checker")]
#[command(author, version, about = "Validate DIMACS-style model counting instances")]
#[command(long_about = "Checks model counting instances (mc, wmc, pmc, pwmc) for format \
    deviations and writes a summary and a per-file dump.\n\n\
    Exit codes:\n  \
    0 - No instance has errors\n  \
    1 - Instance errors found (or warnings with --strict)\n  \
    2 - Configuration or runtime error\n  \
    3 - Nothing to report")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate instance files and write the summary and dump
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Instance files or directories containing instances
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Instance file extension (overrides config)
    #[arg(long)]
    pub ext: Option<String>,

    /// Search directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Prefix of the `_report.txt` and `_dump.json` outputs (overrides config)
    #[arg(short, long)]
    pub output_prefix: Option<String>,

    /// Leading characters that identify a message type in the summary (overrides config)
    #[arg(long)]
    pub significant_chars: Option<usize>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".mc-instance-checker.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
