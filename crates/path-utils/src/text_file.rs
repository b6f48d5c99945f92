//! Text file handle (read | write | push | unshift)

use crate::config::TextOptions;
use crate::constants::FileKind;
use crate::handle::ManagedFile;
use crate::lock::PathLocks;
use crate::{Result, io};
use std::path::Path;

/// A handle bound to one `.txt` file.
///
/// `push` and `unshift` are read-modify-write sequences. They are
/// serialized per file across every handle in the process; a plain
/// [`write`](Self::write) racing with them is not.
#[derive(Debug, Clone)]
pub struct TextFile {
    file: ManagedFile,
}

impl TextFile {
    /// Bind `path` with default options (empty initial value).
    pub fn new(path: &str) -> Self {
        Self::with_options(path, TextOptions::default())
    }

    pub fn with_options(path: &str, options: TextOptions) -> Self {
        Self {
            file: ManagedFile::open(path, FileKind::Text, &options),
        }
    }

    pub fn path(&self) -> &str {
        self.file.raw()
    }

    pub fn native_path(&self) -> &Path {
        self.file.native()
    }

    /// Read the whole file, or `None` if the path is invalid or unreadable.
    pub async fn read(&self) -> Option<String> {
        self.try_read().await.ok()
    }

    pub async fn try_read(&self) -> Result<String> {
        self.file.check_path()?;
        io::read_text(self.file.native())
            .await
            .inspect_err(|e| self.file.report_read_error(e))
    }

    /// Replace the file content with `text`.
    pub fn write(&self, text: &str) -> bool {
        self.try_write(text).is_ok()
    }

    pub fn try_write(&self, text: &str) -> Result<()> {
        self.file.check_path()?;
        io::write_text(self.file.native(), text).inspect_err(|e| self.file.report_write_error(e))
    }

    /// Append `text`, optionally on a new line.
    pub async fn push(&self, text: &str, with_leading_newline: bool) -> bool {
        self.try_push(text, with_leading_newline).await.is_ok()
    }

    pub async fn try_push(&self, text: &str, with_leading_newline: bool) -> Result<()> {
        self.modify(|old| {
            let separator = if with_leading_newline { "\n" } else { "" };
            format!("{old}{separator}{text}")
        })
        .await
    }

    /// Prepend `text`, optionally followed by a new line.
    pub async fn unshift(&self, text: &str, with_trailing_newline: bool) -> bool {
        self.try_unshift(text, with_trailing_newline).await.is_ok()
    }

    pub async fn try_unshift(&self, text: &str, with_trailing_newline: bool) -> Result<()> {
        self.modify(|old| {
            let separator = if with_trailing_newline { "\n" } else { "" };
            format!("{text}{separator}{old}")
        })
        .await
    }

    async fn modify(&self, update: impl FnOnce(&str) -> String) -> Result<()> {
        self.file.check_path()?;

        let lock = PathLocks::global().for_path(self.file.native());
        let _guard = lock.lock().await;

        let old = self.try_read().await?;
        self.try_write(&update(&old))
    }
}
