//! File system helpers for distribution assembly.

use std::fs::FileTimes;
use std::io;
use std::path::Path;
use tokio::fs;

/// Creates the directory and any missing parents. Existing contents are left alone.
pub async fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await
}

/// Copies a regular file, overwriting `to`, then carries over the source's
/// access and modification times. Permissions are copied by [`fs::copy`].
///
/// A read-only file left at `to` by an earlier copy is replaced rather than
/// written through. Fails if the source is not a regular file.
pub async fn copy_preserving(from: &Path, to: &Path) -> io::Result<u64> {
    let metadata = fs::metadata(from).await?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", from.display()),
        ));
    }

    if let Ok(existing) = fs::symlink_metadata(to).await
        && existing.is_file()
        && existing.permissions().readonly()
    {
        fs::remove_file(to).await?;
    }

    let bytes = fs::copy(from, to).await?;

    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    open_for_times(to).await?.into_std().await.set_times(times)?;

    Ok(bytes)
}

/// Opens `path` with no more access than changing its timestamps needs, so
/// copies of read-only sources qualify.
async fn open_for_times(path: &Path) -> io::Result<fs::File> {
    #[cfg(windows)]
    {
        const FILE_WRITE_ATTRIBUTES: u32 = 0x100;
        fs::OpenOptions::new()
            .access_mode(FILE_WRITE_ATTRIBUTES)
            .open(path)
            .await
    }

    #[cfg(not(windows))]
    {
        fs::File::open(path).await
    }
}
