//! Dependency probing.
//!
//! Answers "is this package importable right now?" without changing anything.

use crate::config::Dependency;
use crate::error::{EnvironmentError, Result};
use std::future::Future;
use std::process::Stdio;
use tokio::process::Command;

/// Resolves `sys.argv[1]` with `importlib.util.find_spec` and reports through the exit code.
const FIND_SPEC_SCRIPT: &str =
    "import importlib.util, sys; sys.exit(0 if importlib.util.find_spec(sys.argv[1]) else 1)";

/// Checks whether a single dependency resolves in the current environment.
///
/// Absence is `Ok(false)`. Implementations only return `Err` when the
/// environment itself is broken (e.g. the interpreter cannot be started).
pub trait DependencyProbe {
    /// Whether `dependency` is currently resolvable
    fn is_available(&self, dependency: &Dependency) -> impl Future<Output = Result<bool>> + Send;
}

/// Probe backed by a Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonModuleProbe {
    python: String,
}

impl PythonModuleProbe {
    /// Probe using the given interpreter
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl DependencyProbe for PythonModuleProbe {
    async fn is_available(&self, dependency: &Dependency) -> Result<bool> {
        let module = dependency.module_name();

        let status = Command::new(&self.python)
            .args(["-c", FIND_SPEC_SCRIPT, module])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| EnvironmentError::ToolNotFound {
                tool: self.python.clone(),
                reason: e.to_string(),
            })?;

        log::debug!(
            "find_spec({}) via {} -> {:?}",
            module,
            self.python,
            status.code()
        );

        Ok(status.success())
    }
}

/// Returns the dependencies that are not resolvable, preserving input order.
pub async fn missing_dependencies<P: DependencyProbe>(
    probe: &P,
    dependencies: &[Dependency],
) -> Result<Vec<Dependency>> {
    let mut missing = Vec::new();

    for dependency in dependencies {
        if !probe.is_available(dependency).await? {
            missing.push(dependency.clone());
        }
    }

    Ok(missing)
}
