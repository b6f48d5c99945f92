//! Per-path serialization for read-modify-write operations

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

/// Process-wide registry handing out one async mutex per file.
///
/// Entries are keyed by the canonical path (symlinks and `..` resolved via
/// `dunce`), so two handles reaching the same file through different
/// spellings share one mutex and their push/unshift calls queue up instead
/// of losing updates. A path that cannot be canonicalized, such as one that
/// does not exist yet, is keyed as given.
///
/// Entries nobody else holds are dropped on the next lookup, so the
/// registry only grows with the number of files in use at the same time.
#[derive(Debug, Default)]
pub struct PathLocks {
    locks: Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>,
}

static GLOBAL: LazyLock<PathLocks> = LazyLock::new(PathLocks::default);

impl PathLocks {
    /// The registry shared by every file handle.
    pub fn global() -> &'static PathLocks {
        &GLOBAL
    }

    /// Mutex guarding `path`, created on first use.
    pub fn for_path(&self, path: &Path) -> Arc<tokio::sync::Mutex<()>> {
        let key = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // Only the registry holds these, so no caller can be waiting on them
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(key).or_default())
    }

    /// Number of paths whose mutex is still registered.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
