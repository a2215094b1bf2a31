// milog-cli/src/lib.rs
//
// Library portion of the milog CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, InspectArgs};
pub use commands::inspect::execute_inspect;
