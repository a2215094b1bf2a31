// milog-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Milog: MediaInfo text log inspection tool",
    long_about = "Parses saved MediaInfo text logs and prints normalized codec, channel, and language classifications via the milog-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parses a MediaInfo text log and prints every derived classification
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Saved MediaInfo text log (may contain multiple concatenated reports)
    #[arg(required = true, value_name = "LOG_FILE")]
    pub log_file: PathBuf,
}
