//! File I/O primitives with locking
//!
//! Writes are synchronous, reads are async. Nothing here creates parent
//! directories; that is [`PathCreator`](crate::PathCreator)'s job.

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write content to a file, creating or truncating it.
///
/// The target itself is opened and held under an advisory exclusive lock
/// while it is truncated and filled, so symlinks are followed and the
/// file keeps its inode and permissions.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    let result = write_locked(path, content);
    tracing::debug!(path = %path.display(), bytes = content.len(), ok = result.is_ok(), "write_file");
    result
}

fn write_locked(path: &Path, content: &[u8]) -> Result<()> {
    // Truncation waits for the lock so a concurrent writer never sees its output cut
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    file.set_len(0).map_err(|e| Error::io(path, e))?;
    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;

    FileExt::unlock(&file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    Ok(())
}

/// Write UTF-8 text to a file, creating or truncating it.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_file(path, content.as_bytes())
}

/// Read raw bytes from a file.
pub async fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| Error::io(path, e))
}

/// Read a file as text, replacing invalid UTF-8 sequences.
pub async fn read_text(path: &Path) -> Result<String> {
    let bytes = read_bytes(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
