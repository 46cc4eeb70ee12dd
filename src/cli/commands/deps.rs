//! `deps` command implementation.

use crate::cli::RuntimeConfig;
use crate::config::PackagerConfig;
use crate::deps::{PipInstaller, PythonModuleProbe};
use crate::error::Result;
use crate::pipeline;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Probe the configured dependencies and install (or, with `check_only`, list) the missing ones
pub(super) async fn execute_deps(
    check_only: bool,
    packager: &PackagerConfig,
    config: &RuntimeConfig,
) -> Result<i32> {
    let output = config.output();
    let probe = PythonModuleProbe::new(&packager.python);

    if check_only {
        let missing = pipeline::check_dependencies(&probe, packager, output).await?;
        if missing.is_empty() {
            output.success("All dependencies are already installed");
            return Ok(EXIT_SUCCESS);
        }

        let names: Vec<&str> = missing.iter().map(|d| d.package.as_str()).collect();
        output.warn(&format!(
            "Missing: {}. Run `onefile_packager deps` to install them.",
            names.join(", ")
        ));
        return Ok(EXIT_FAILURE);
    }

    let installer = PipInstaller::new(&packager.python);
    let report = pipeline::install_dependencies(&probe, &installer, packager, output).await?;
    if report.was_satisfied() {
        output.success("All dependencies are already installed");
    } else {
        log::info!("Installed {} package(s)", report.installed.len());
        output.success(&format!(
            "Installation complete: {}",
            report.installed.join(", ")
        ));
    }

    Ok(EXIT_SUCCESS)
}
