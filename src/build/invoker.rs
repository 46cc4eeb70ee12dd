//! Builder subprocess execution with live output.

use super::command::BuildCommand;
use super::lines::OutputLines;
use crate::error::{BuildError, EnvironmentError, PackagerError, Result};
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Lines echoed while the builder ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of output lines streamed
    pub lines: usize,
}

/// Runs the builder to completion, handing every output line to `on_line` as it arrives.
///
/// Blocks the calling thread: stdout and stderr share one pipe that is read
/// line by line until the child closes it, then the exit status is awaited.
/// A non-zero exit is [`BuildError::Failed`]; nothing is retried.
pub fn invoke<F>(command: BuildCommand, mut on_line: F) -> Result<BuildSummary>
where
    F: FnMut(&str),
{
    log::info!("Spawning builder: {}", command);

    let (lines, stdout, stderr) = OutputLines::merged().map_err(|e| BuildError::Spawn {
        command: command.to_string(),
        reason: format!("cannot create output pipe: {}", e),
    })?;

    // The Command keeps its copies of the write end until dropped
    let mut child = {
        let mut builder = Command::new(command.program());
        builder
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr);
        builder.spawn()
    }
    .map_err(|e| -> PackagerError {
        if e.kind() == ErrorKind::NotFound {
            EnvironmentError::ToolNotFound {
                tool: command.program().to_string(),
                reason: e.to_string(),
            }
            .into()
        } else {
            BuildError::Spawn {
                command: command.to_string(),
                reason: e.to_string(),
            }
            .into()
        }
    })?;

    let mut summary = BuildSummary::default();
    for line in lines {
        on_line(&line);
        summary.lines += 1;
    }

    let status = child.wait().map_err(|e| BuildError::Wait {
        reason: e.to_string(),
    })?;

    log::debug!("Builder exited with {:?}", status.code());

    match status.code() {
        Some(0) => Ok(summary),
        Some(code) => Err(BuildError::Failed { code }.into()),
        None => Err(BuildError::Terminated.into()),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> BuildCommand {
        BuildCommand::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_streams_lines_in_write_order() {
        let mut seen = Vec::new();
        let summary = invoke(sh("echo one; echo two 1>&2; echo three"), |line| {
            seen.push(line.to_string())
        })
        .unwrap();

        assert_eq!(summary.lines, 3);
        assert_eq!(seen, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_non_zero_exit_surfaces_code() {
        let mut seen = Vec::new();
        let err = invoke(sh("echo compiling; exit 3"), |line| seen.push(line.to_string()))
            .unwrap_err();

        assert_eq!(seen, vec!["compiling"]);
        assert!(matches!(
            err,
            PackagerError::Build(BuildError::Failed { code: 3 })
        ));
    }

    #[test]
    fn test_missing_builder_is_environment_error() {
        let err = invoke(BuildCommand::new("no-such-builder-9c1e", vec![]), |_| {}).unwrap_err();

        assert!(matches!(
            err,
            PackagerError::Environment(EnvironmentError::ToolNotFound { .. })
        ));
    }
}
