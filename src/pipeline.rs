//! The two entry-point pipelines.
//!
//! Both are strictly sequential: each stage finishes before the next starts
//! and the first error ends the run.

use crate::build::{self, BuildCommand};
use crate::cli::OutputManager;
use crate::config::{Dependency, PackagerConfig};
use crate::console::IconGate;
use crate::deps::{self, DependencyProbe, InstallReport, PackageInstaller};
use crate::dist::{self, AssemblyReport};
use crate::error::{BuildError, Result};
use std::io::{BufRead, Write};

/// How a build run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Built and assembled
    Completed(AssemblyReport),
    /// User declined at the icon gate; nothing was spawned
    Cancelled,
}

/// Reports which configured dependencies are missing without installing anything.
pub async fn check_dependencies<P: DependencyProbe>(
    probe: &P,
    config: &PackagerConfig,
    output: &OutputManager,
) -> Result<Vec<Dependency>> {
    output.section("Checking dependencies");

    let missing = deps::missing_dependencies(probe, &config.dependencies).await?;
    for dependency in &config.dependencies {
        if missing.contains(dependency) {
            output.warn(&format!("{} is not installed", dependency.package));
        } else {
            output.success(&format!("{} is installed", dependency.package));
        }
    }

    Ok(missing)
}

/// Probes every configured dependency and installs the missing ones in order.
pub async fn install_dependencies<P, I>(
    probe: &P,
    installer: &I,
    config: &PackagerConfig,
    output: &OutputManager,
) -> Result<InstallReport>
where
    P: DependencyProbe,
    I: PackageInstaller,
{
    let missing = check_dependencies(probe, config, output).await?;
    deps::install_missing(installer, &missing, output).await
}

/// Icon gate, builder preflight, build, then distribution assembly.
///
/// The gate reads answers from `input` and writes prompts to `prompt_out`.
/// When the user declines, this returns [`BuildOutcome::Cancelled`] before
/// any builder process is started.
pub async fn run_build<R, W>(
    config: &PackagerConfig,
    assume_yes: bool,
    input: R,
    prompt_out: W,
    output: &OutputManager,
) -> Result<BuildOutcome>
where
    R: BufRead,
    W: Write,
{
    let resolution = IconGate::new(&config.builder.icon)
        .assume_yes(assume_yes)
        .resolve(input, prompt_out)?;

    if !resolution.proceed() {
        output.info("Cancelled by user, nothing was built");
        return Ok(BuildOutcome::Cancelled);
    }

    build::ensure_tool(
        &config.builder.program,
        config.builder.version_arg.as_deref(),
    )
    .await?;

    output.section("Building application");
    let command = BuildCommand::from_spec(&config.builder, resolution.use_icon());
    output.progress(&format!("{} is running, please wait...", config.builder.program));

    if !command.has_icon() {
        output.info("Building without an icon");
    }

    let echo = output.clone();
    let summary =
        tokio::task::spawn_blocking(move || build::invoke(command, |line| echo.println(line)))
            .await
            .map_err(|e| BuildError::Wait {
                reason: e.to_string(),
            })??;
    output.success(&format!(
        "Build finished ({} lines of builder output)",
        summary.lines
    ));

    output.section("Assembling distribution");
    let report = dist::assemble(&config.manifest, &config.output_dir, output).await?;
    output.success(&format!(
        "{} files copied into {}",
        report.copied.len(),
        report.destination.display()
    ));

    Ok(BuildOutcome::Completed(report))
}
