//! Command line interface for onefile_packager.
//!
//! Parses arguments, dispatches to the `deps` and `build` entry points and
//! turns their results into process exit codes.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
