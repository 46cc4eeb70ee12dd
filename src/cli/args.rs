//! Command line argument parsing and validation.
//!
//! Two entry points share one binary: `deps` prepares the Python
//! environment and `build` produces the distribution folder.

use crate::config::{DEFAULT_PYTHON, PackagerConfig};
use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build a single-file executable and assemble its distribution folder
#[derive(Parser, Debug)]
#[command(
    name = "onefile_packager",
    version,
    about = "Build a single-file executable and assemble its distribution folder",
    long_about = "Install the build dependencies, run the single-file builder and copy
the binary together with its companion files into a distribution folder.

Usage:
  onefile_packager deps            # install missing build dependencies
  onefile_packager deps --check    # only report what is missing
  onefile_packager build           # build and assemble the distribution"
)]
pub struct Args {
    /// Python interpreter used to probe and install dependencies
    #[arg(long, global = true, env = "ONEFILE_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Exit immediately instead of waiting for a key press
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Entry points
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Install missing build dependencies
    Deps {
        /// Report missing dependencies without installing them
        #[arg(long)]
        check: bool,
    },

    /// Build the executable and assemble the distribution folder
    Build {
        /// Continue without an icon instead of asking when it is missing
        #[arg(short, long)]
        yes: bool,

        /// Distribution folder to create
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

impl Command {
    /// Get command name for display
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deps { .. } => "deps",
            Command::Build { .. } => "build",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), CliError> {
        if self.python.trim().is_empty() {
            return Err(CliError::InvalidArguments {
                reason: "--python must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Default configuration with command line overrides applied
    pub fn packager_config(&self) -> PackagerConfig {
        let mut config = PackagerConfig {
            python: self.python.clone(),
            ..PackagerConfig::default()
        };

        if let Command::Build {
            output_dir: Some(dir),
            ..
        } = &self.command
        {
            config.output_dir = dir.clone();
        }

        config
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
    /// Wait for a key press before exiting
    pause: bool,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(pause: bool) -> Self {
        Self {
            output: super::OutputManager::new(false),
            pause,
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether to pause before exit
    pub fn should_pause(&self) -> bool {
        self.pause
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(!args.no_pause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_flags() {
        let args = Args::try_parse_from([
            "onefile_packager",
            "build",
            "--yes",
            "--output-dir",
            "out",
            "--no-pause",
        ])
        .unwrap();

        assert!(args.no_pause);
        assert_eq!(
            args.command,
            Command::Build {
                yes: true,
                output_dir: Some(PathBuf::from("out")),
            }
        );
        assert_eq!(args.packager_config().output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_deps_check_with_python_override() {
        let args =
            Args::try_parse_from(["onefile_packager", "--python", "/opt/py/bin/python", "deps", "--check"])
                .unwrap();

        assert_eq!(args.command, Command::Deps { check: true });
        assert_eq!(args.packager_config().python, "/opt/py/bin/python");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_empty_python_is_invalid() {
        let args = Args::try_parse_from(["onefile_packager", "--python", " ", "deps"]).unwrap();
        match args.validate() {
            Err(CliError::InvalidArguments { reason }) => assert!(reason.contains("--python")),
            other => panic!("unexpected validation result: {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["onefile_packager"]).is_err());
    }
}
