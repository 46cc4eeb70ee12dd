//! Distribution folder assembly.
//!
//! Copies the manifest into a single output directory. The directory is
//! created if needed and never cleared, so re-running overwrites earlier
//! copies in place.
//!
//! Per entry:
//! - missing and optional: warn, record in [`AssemblyReport::skipped`], continue
//! - missing and required: stop with [`AssemblyError::RequiredMissing`]
//! - copy fails: stop with [`AssemblyError::CopyFailed`], leaving what was
//!   already copied on disk

mod fs;

pub use fs::copy_preserving;

use crate::cli::OutputManager;
use crate::config::ManifestEntry;
use crate::error::{AssemblyError, Result};
use std::path::{Path, PathBuf};

/// Outcome of a successful assembly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Destination directory
    pub destination: PathBuf,
    /// Files written into the destination, in manifest order
    pub copied: Vec<PathBuf>,
    /// Optional sources that did not exist
    pub skipped: Vec<PathBuf>,
}

/// Copies every manifest entry into `destination`.
pub async fn assemble(
    manifest: &[ManifestEntry],
    destination: &Path,
    output: &OutputManager,
) -> Result<AssemblyReport> {
    fs::ensure_dir(destination)
        .await
        .map_err(|source| AssemblyError::CreateDestination {
            path: destination.to_path_buf(),
            source,
        })?;

    let mut report = AssemblyReport {
        destination: destination.to_path_buf(),
        ..Default::default()
    };

    for (index, entry) in manifest.iter().enumerate() {
        let source = &entry.source;
        output.step(
            index + 1,
            manifest.len(),
            &format!("Copying {}", source.display()),
        );

        if !source.exists() {
            if entry.required {
                return Err(AssemblyError::RequiredMissing {
                    path: source.clone(),
                }
                .into());
            }
            output.warn(&format!("{} does not exist, skipping", source.display()));
            report.skipped.push(source.clone());
            continue;
        }

        let target = target_path(source, destination)?;
        log::debug!("copy {} -> {}", source.display(), target.display());

        copy_preserving(source, &target)
            .await
            .map_err(|e| AssemblyError::CopyFailed {
                from: source.clone(),
                to: target.clone(),
                reason: e.to_string(),
            })?;

        report.copied.push(target);
    }

    Ok(report)
}

fn target_path(source: &Path, destination: &Path) -> Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| AssemblyError::CopyFailed {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        reason: "source path has no file name".to_string(),
    })?;
    Ok(destination.join(name))
}
