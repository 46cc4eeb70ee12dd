//! Command execution for the `deps` and `build` entry points.

mod build;
mod deps;

use crate::cli::{Args, Command, OutputManager, RuntimeConfig};
use crate::console;
use crate::error::{PackagerError, Result};
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

use build::execute_build;
use deps::execute_deps;

/// Execute the command selected by `args` and return the process exit code.
///
/// Stage failures are reported here and become exit code 1; only errors
/// that prevent reporting propagate as `Err`.
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    if let Err(invalid) = args.validate() {
        report_failure(config.output(), &args.command, &invalid.into());
        return Ok(EXIT_FAILURE);
    }

    let packager = args.packager_config();

    let result = match &args.command {
        Command::Deps { check } => execute_deps(*check, &packager, &config).await,
        Command::Build { yes, .. } => execute_build(*yes, &packager, &config).await,
    };

    let exit_code = match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_failure(config.output(), &args.command, &e);
            EXIT_FAILURE
        }
    };

    if config.should_pause() && pauses_after(&args.command, exit_code) {
        let mut reader = console::probe_key_reader();
        console::pause(reader.as_mut(), config.output());
    }

    Ok(exit_code)
}

fn report_failure(output: &OutputManager, command: &Command, error: &PackagerError) {
    output.error(&format!("Command '{}' failed: {}", command.name(), error));

    let suggestions = error.recovery_suggestions();
    if !suggestions.is_empty() {
        output.println("\n💡 Recovery suggestions:");
        for suggestion in suggestions {
            output.println(&format!("  • {}", suggestion));
        }
    }
}

/// `deps` always waits so its report stays visible; `build` only after a
/// completed run, since failures and cancellation exit straight away.
fn pauses_after(command: &Command, exit_code: i32) -> bool {
    match command {
        Command::Deps { .. } => true,
        Command::Build { .. } => exit_code == EXIT_SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EXIT_CANCELLED;

    #[test]
    fn test_pause_policy() {
        let deps = Command::Deps { check: false };
        let build = Command::Build {
            yes: false,
            output_dir: None,
        };

        assert!(pauses_after(&deps, EXIT_SUCCESS));
        assert!(pauses_after(&deps, EXIT_FAILURE));
        assert!(pauses_after(&build, EXIT_SUCCESS));
        assert!(!pauses_after(&build, EXIT_FAILURE));
        assert!(!pauses_after(&build, EXIT_CANCELLED));
    }
}
