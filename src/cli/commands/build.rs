//! `build` command implementation.

use crate::cli::RuntimeConfig;
use crate::config::PackagerConfig;
use crate::error::Result;
use crate::pipeline::{self, BuildOutcome};
use crate::{EXIT_CANCELLED, EXIT_SUCCESS};
use std::io;

/// Run the build pipeline against the real console
pub(super) async fn execute_build(
    assume_yes: bool,
    packager: &PackagerConfig,
    config: &RuntimeConfig,
) -> Result<i32> {
    let output = config.output();
    output.section(&format!("Packaging {}", packager.builder.output_name));

    let outcome = pipeline::run_build(
        packager,
        assume_yes,
        io::stdin().lock(),
        io::stdout(),
        output,
    )
    .await?;

    match outcome {
        BuildOutcome::Cancelled => Ok(EXIT_CANCELLED),
        BuildOutcome::Completed(report) => {
            output.section("Packaging complete");
            if !report.skipped.is_empty() {
                output.warn(&format!("{} optional file(s) were missing:", report.skipped.len()));
                for path in &report.skipped {
                    output.indent(&path.display().to_string());
                }
            }
            output.info(&format!(
                "Archive the contents of \"{}\" to distribute",
                report.destination.display()
            ));
            Ok(EXIT_SUCCESS)
        }
    }
}
