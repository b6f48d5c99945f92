//! Directory listing

use crate::constants::READDIR_ERROR_ID;
use serde::Serialize;
use std::path::Path;

/// Outcome of [`read_directory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    /// Entry names in byte-wise order, `None` on failure
    pub items: Option<Vec<String>>,
    pub error: bool,
    /// Empty on success
    pub message: String,
}

impl DirectoryListing {
    fn ok(items: Vec<String>) -> Self {
        Self {
            items: Some(items),
            error: false,
            message: String::new(),
        }
    }

    fn failed(message: impl std::fmt::Display) -> Self {
        Self {
            items: None,
            error: true,
            message: format!("{READDIR_ERROR_ID} {message}"),
        }
    }

    pub fn is_ok(&self) -> bool {
        !self.error
    }
}

/// List the names of all entries in `path`, skipping `names_to_exclude`.
///
/// Names are sorted byte-wise. Exclusion is by exact entry name. Failures
/// are returned in the listing, never raised.
pub async fn read_directory<S: AsRef<str>>(
    path: impl AsRef<Path>,
    names_to_exclude: &[S],
) -> DirectoryListing {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return DirectoryListing::failed("Invalid directory path");
    }

    let mut entries = match tokio::fs::read_dir(path).await {
        Ok(entries) => entries,
        Err(e) => return DirectoryListing::failed(e),
    };

    let mut names = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().into_owned()),
            Ok(None) => break,
            Err(e) => return DirectoryListing::failed(e),
        }
    }

    // Byte-wise order, independent of the filesystem's own iteration order
    names.sort();
    let items: Vec<String> = names
        .into_iter()
        .filter(|name| !names_to_exclude.iter().any(|n| n.as_ref() == name.as_str()))
        .collect();

    tracing::debug!(path = %path.display(), count = items.len(), "read_directory");
    DirectoryListing::ok(items)
}
