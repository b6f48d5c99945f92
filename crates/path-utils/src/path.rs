//! Path normalization and validation
//!
//! Paths are stored internally slash-delimited and without boundary
//! separators. They are only resolved to platform-native form against a
//! root directory at I/O boundaries.

use crate::constants::SEPARATOR;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A slash-delimited path with no leading or trailing separator.
///
/// Normalization never fails; whether the path is usable is decided by
/// [`normalize`], which also validates the individual segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Strips every leading and trailing separator. On Windows backslashes
    /// are converted to forward slashes first; elsewhere a backslash is an
    /// ordinary file name character.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        #[cfg(windows)]
        let path_str = path_str.replace('\\', "/");
        Self {
            inner: path_str.trim_matches(SEPARATOR).to_string(),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// True when nothing but whitespace is left after stripping separators.
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }

    /// Split into segments on interior separator runs.
    ///
    /// A separator directly preceded by `:` is kept inside the segment so
    /// drive-letter paths like `D:/data` stay intact.
    pub fn segments(&self) -> Vec<&str> {
        let bytes = self.inner.as_bytes();
        let mut segments = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'/' && (i == 0 || bytes[i - 1] != b':') {
                segments.push(&self.inner[start..i]);
                while i < bytes.len() && bytes[i] == b'/' {
                    i += 1;
                }
                start = i;
            } else {
                i += 1;
            }
        }
        segments.push(&self.inner[start..]);
        segments
    }

    /// Every path prefix in creation order, ending with the full path.
    ///
    /// `a/b/c` yields `a`, `a/b`, `a/b/c`.
    pub fn prefixes(&self) -> Vec<Self> {
        let mut current = String::new();
        self.segments()
            .into_iter()
            .map(|segment| {
                if !current.is_empty() {
                    current.push(SEPARATOR);
                }
                current.push_str(segment);
                Self {
                    inner: current.clone(),
                }
            })
            .collect()
    }

    /// All segments except the last, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<Self> {
        let segments = self.segments();
        if segments.len() < 2 {
            return None;
        }
        Some(Self {
            inner: segments[..segments.len() - 1].join("/"),
        })
    }

    /// Get the last segment.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last().copied().filter(|s| !s.is_empty())
    }

    /// Resolve against `root` into a platform-native path for I/O.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.inner)
    }

    /// Check if this path exists below `root`.
    pub fn exists_in(&self, root: &Path) -> bool {
        self.resolve(root).exists()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Decision reached by [`normalize`] when it does not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    /// Path is valid and absent; the caller should create it.
    Proceed(NormalizedPath),
    /// Path already exists; nothing to create.
    AlreadyExists(NormalizedPath),
}

impl Normalization {
    /// Whether the caller should go on creating the path.
    pub fn should_continue(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }

    /// Result to report when stopping here.
    pub fn outcome(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    pub fn path(&self) -> &NormalizedPath {
        match self {
            Self::Proceed(path) | Self::AlreadyExists(path) => path,
        }
    }
}

/// Normalize `raw` and decide whether it needs to be created below `root`.
///
/// Checks run in a fixed order: blank path, existing path, empty segment.
/// An existing path is accepted even if its spelling has empty segments.
pub fn normalize(raw: &str, root: &Path) -> Result<Normalization> {
    let path = NormalizedPath::new(raw);

    if path.is_blank() {
        return Err(Error::EmptyPath);
    }

    if path.exists_in(root) {
        return Ok(Normalization::AlreadyExists(path));
    }

    if path.segments().iter().any(|s| s.trim().is_empty()) {
        return Err(Error::EmptyPathSegment {
            path: path.as_str().to_string(),
        });
    }

    Ok(Normalization::Proceed(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strips_boundary_separators() {
        assert_eq!(NormalizedPath::new("///a/b//").as_str(), "a/b");
    }

    #[test]
    fn test_segments_collapse_separator_runs() {
        let path = NormalizedPath::new("a//b///c");
        assert_eq!(path.segments(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_segments_keep_drive_letter() {
        let path = NormalizedPath::new("D:/data/file.txt");
        assert_eq!(path.segments(), vec!["D:/data", "file.txt"]);
    }

    #[test]
    fn test_prefixes_in_order() {
        let path = NormalizedPath::new("a/b/c");
        let prefixes: Vec<String> = path.prefixes().iter().map(|p| p.to_string()).collect();
        assert_eq!(prefixes, vec!["a", "a/b", "a/b/c"]);
    }

    #[test]
    fn test_normalize_rejects_blank_segment() {
        let temp = TempDir::new().unwrap();
        let result = normalize("a/ /b", temp.path());
        assert!(matches!(result, Err(Error::EmptyPathSegment { .. })));
    }

    #[test]
    fn test_normalize_reports_existing() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("present")).unwrap();

        let decision = normalize("/present/", temp.path()).unwrap();
        assert!(!decision.should_continue());
        assert!(decision.outcome());
    }
}
