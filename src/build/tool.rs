//! Preflight check for external tools.

use crate::error::{EnvironmentError, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Locates `program` on `PATH` and, when `version_arg` is given, runs it once.
///
/// Returns the resolved path. Any failure is an [`EnvironmentError`].
pub async fn ensure_tool(program: &str, version_arg: Option<&str>) -> Result<PathBuf> {
    let path = which::which(program).map_err(|e| EnvironmentError::ToolNotFound {
        tool: program.to_string(),
        reason: e.to_string(),
    })?;

    log::debug!("Found {} at {}", program, path.display());

    let Some(flag) = version_arg else {
        return Ok(path);
    };

    let output = Command::new(&path)
        .arg(flag)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| EnvironmentError::ToolUnusable {
            tool: program.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(EnvironmentError::ToolUnusable {
            tool: program.to_string(),
            reason: format!(
                "'{} {}' exited with {:?}: {}",
                program,
                flag,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
        .into());
    }

    log::info!(
        "{} {}",
        program,
        String::from_utf8_lossy(&output.stdout).trim()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackagerError;

    #[tokio::test]
    async fn test_unknown_tool_is_not_found() {
        let err = ensure_tool("no-such-tool-5b2d", Some("--version"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PackagerError::Environment(EnvironmentError::ToolNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_version_check_is_unusable() {
        let err = ensure_tool("false", Some("--version")).await.unwrap_err();

        assert!(matches!(
            err,
            PackagerError::Environment(EnvironmentError::ToolUnusable { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_skip_version_check() {
        let path = ensure_tool("sh", None).await.unwrap();
        assert!(path.is_absolute());
    }
}
