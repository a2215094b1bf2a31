// milog-cli/src/main.rs
//
// Binary entry point: parses arguments, initializes logging via
// env_logger (RUST_LOG), dispatches to the command implementations,
// and maps failures to a non-zero exit code.

use clap::Parser;
use std::process;

use milog_cli::cli::{Cli, Commands};
use milog_cli::commands::inspect::execute_inspect;
use milog_cli::output::print_error;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => execute_inspect(&args.log_file),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        process::exit(1);
    }
}
