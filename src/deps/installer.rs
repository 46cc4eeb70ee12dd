//! Sequential installation of missing packages.

use crate::cli::OutputManager;
use crate::config::Dependency;
use crate::error::{InstallError, Result};
use std::future::Future;
use tokio::process::Command;

/// Installs one package into the environment.
pub trait PackageInstaller {
    /// Install `package`, returning the raw error text on failure
    fn install(&self, package: &str) -> impl Future<Output = std::result::Result<(), String>> + Send;
}

/// Installer that shells out to `python -m pip install`.
///
/// Output is inherited so pip's own progress is visible.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
}

impl PipInstaller {
    /// Installer using the given interpreter
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl PackageInstaller for PipInstaller {
    async fn install(&self, package: &str) -> std::result::Result<(), String> {
        let args = ["-m", "pip", "install", package];
        log::debug!("Running {} {}", self.python, args.join(" "));

        let status = Command::new(&self.python)
            .args(args)
            .status()
            .await
            .map_err(|e| format!("failed to run {} {}: {}", self.python, args.join(" "), e))?;

        if status.success() {
            return Ok(());
        }

        Err(match status.code() {
            Some(code) => format!(
                "Command '{} {}' returned non-zero exit status {}",
                self.python,
                args.join(" "),
                code
            ),
            None => format!(
                "Command '{} {}' was terminated by a signal",
                self.python,
                args.join(" ")
            ),
        })
    }
}

/// Packages installed by [`install_missing`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Packages installed during this run, in order
    pub installed: Vec<String>,
}

impl InstallReport {
    /// True when nothing needed installing
    pub fn was_satisfied(&self) -> bool {
        self.installed.is_empty()
    }
}

/// Installs each missing dependency in order, stopping at the first failure.
///
/// An empty list returns a satisfied report immediately without invoking
/// the installer.
pub async fn install_missing<I: PackageInstaller>(
    installer: &I,
    missing: &[Dependency],
    output: &OutputManager,
) -> Result<InstallReport> {
    let mut report = InstallReport::default();

    if missing.is_empty() {
        log::debug!("Nothing to install");
        return Ok(report);
    }

    let names: Vec<&str> = missing.iter().map(|d| d.package.as_str()).collect();
    output.info(&format!("Installing missing dependencies: {}", names.join(", ")));

    for (index, dependency) in missing.iter().enumerate() {
        output.step(
            index + 1,
            missing.len(),
            &format!("Installing {}", dependency.package),
        );

        if let Err(reason) = installer.install(&dependency.package).await {
            log::warn!("Install of {} failed: {}", dependency.package, reason);
            return Err(InstallError::PackageFailed {
                package: dependency.package.clone(),
                reason,
                remaining: names[index..].iter().map(|s| s.to_string()).collect(),
            }
            .into());
        }

        output.success(&format!("{} installed", dependency.package));
        report.installed.push(dependency.package.clone());
    }

    Ok(report)
}
