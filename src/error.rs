//! Error types for onefile_packager operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for onefile_packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all onefile_packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// Required external tool missing or unusable
    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentError),

    /// Package installation errors
    #[error("Install error: {0}")]
    Install(#[from] InstallError),

    /// Builder subprocess errors
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Distribution folder errors
    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors about the environment the pipeline runs in
#[derive(Error, Debug)]
pub enum EnvironmentError {
    /// Tool could not be located or spawned
    #[error("Required tool '{tool}' not found: {reason}")]
    ToolNotFound {
        /// Tool name or path
        tool: String,
        /// Reason for the error
        reason: String,
    },

    /// Tool exists but its version probe failed
    #[error("Required tool '{tool}' is not usable: {reason}")]
    ToolUnusable {
        /// Tool name or path
        tool: String,
        /// Reason for the error
        reason: String,
    },
}

/// Package installation errors
#[derive(Error, Debug)]
pub enum InstallError {
    /// Installing a package failed; the rest of the batch was not attempted
    #[error("Failed to install '{package}': {reason}")]
    PackageFailed {
        /// Package that failed
        package: String,
        /// Raw error from the package manager invocation
        reason: String,
        /// Packages still not installed, the failing one first
        remaining: Vec<String>,
    },
}

/// Builder subprocess errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Builder could not be started
    #[error("Failed to start '{command}': {reason}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Reason for the error
        reason: String,
    },

    /// Builder exited with a non-zero code
    #[error("Builder exited with code {code}")]
    Failed {
        /// Exit code reported by the builder
        code: i32,
    },

    /// Builder was terminated by a signal
    #[error("Builder was terminated before reporting an exit code")]
    Terminated,

    /// Waiting on the builder failed
    #[error("Lost track of builder process: {reason}")]
    Wait {
        /// Reason for the error
        reason: String,
    },
}

/// Distribution assembly errors
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Destination directory could not be created
    #[error("Failed to create output directory {path}: {source}")]
    CreateDestination {
        /// Destination directory
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A manifest entry flagged as required does not exist
    #[error("Required file {path} does not exist")]
    RequiredMissing {
        /// Missing source path
        path: PathBuf,
    },

    /// Copying a manifest entry failed
    #[error("Failed to copy {from} to {to}: {reason}")]
    CopyFailed {
        /// Source path
        from: PathBuf,
        /// Destination path
        to: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PackagerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackagerError::Environment(EnvironmentError::ToolNotFound { tool, .. })
            | PackagerError::Environment(EnvironmentError::ToolUnusable { tool, .. }) => vec![
                format!("Make sure '{}' is installed and on your PATH", tool),
                "Run `onefile_packager deps` to install the build dependencies".to_string(),
            ],
            PackagerError::Install(InstallError::PackageFailed { remaining, .. }) => vec![
                format!(
                    "Try installing manually: python -m pip install {}",
                    remaining.join(" ")
                ),
                "Check your network connection and package index configuration".to_string(),
            ],
            PackagerError::Build(BuildError::Failed { .. }) => vec![
                "Scroll up to the builder output for the first error it reported".to_string(),
                "Run `onefile_packager deps --check` to confirm all imports resolve".to_string(),
            ],
            PackagerError::Assembly(AssemblyError::RequiredMissing { path }) => vec![format!(
                "Check that the build produced {}",
                path.display()
            )],
            PackagerError::Assembly(AssemblyError::CopyFailed { to, .. }) => vec![
                format!("Check that {} is writable and not in use", to.display()),
                "The output folder may be partially populated; re-run the build".to_string(),
            ],
            PackagerError::Cli(CliError::InvalidArguments { .. }) => {
                vec!["Run `onefile_packager --help` for usage".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
