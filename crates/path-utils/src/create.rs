//! Directory and file path creation
//!
//! Creates complete paths like `path/to/dir`, `path/to/file.ext` or
//! `D:/path/to/dir`, one directory level at a time.

use crate::constants::{FileKind, PathKind};
use crate::diagnostics::Diagnostics;
use crate::path::{NormalizedPath, Normalization, normalize};
use crate::{Error, Result, io};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates directories and files below a root directory.
#[derive(Debug, Clone)]
pub struct PathCreator {
    diagnostics: Diagnostics,
    root: PathBuf,
    pretty_json: bool,
}

impl PathCreator {
    /// Creator rooted at the current directory with default diagnostics.
    pub fn new() -> Self {
        Self::with_diagnostics(Diagnostics::default())
    }

    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            diagnostics,
            root: PathBuf::from("."),
            pretty_json: false,
        }
    }

    /// Resolve relative paths against `root` instead of the current directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Pretty-print content written to `.json` files.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a directory and every missing parent.
    ///
    /// Returns `true` if the directory exists afterwards.
    pub fn make_dir(&self, path: &str) -> bool {
        self.try_make_dir(path).is_ok()
    }

    /// Create a file holding `content`, creating parent directories first.
    ///
    /// Content is JSON-serialized when the path ends in `.json`; otherwise
    /// strings are written verbatim and other values as their JSON text.
    /// An already existing path is left untouched and reported as success.
    pub fn make_file<C: Serialize + ?Sized>(&self, path: &str, content: &C) -> bool {
        self.try_make_file(path, content).is_ok()
    }

    /// Like [`make_dir`](Self::make_dir) but reports why creation failed.
    pub fn try_make_dir(&self, path: &str) -> Result<()> {
        match self.first_step(path, PathKind::Directory)? {
            Normalization::AlreadyExists(_) => Ok(()),
            Normalization::Proceed(path) => self.create_dirs(&path),
        }
    }

    /// Like [`make_file`](Self::make_file) but reports why creation failed.
    pub fn try_make_file<C: Serialize + ?Sized>(&self, path: &str, content: &C) -> Result<()> {
        let path = match self.first_step(path, PathKind::File)? {
            Normalization::AlreadyExists(_) => return Ok(()),
            Normalization::Proceed(path) => path,
        };

        if let Some(parent) = path.parent() {
            self.create_dirs(&parent)?;
        }

        let native = path.resolve(&self.root);
        let result = self
            .render(&path, content)
            .and_then(|text| io::write_text(&native, &text));

        match result {
            Ok(()) => {
                self.diagnostics
                    .success(format!("\tFile '{path}' Was Created.\n"));
                Ok(())
            }
            Err(e) => {
                self.diagnostics.error(format!(
                    "\tError To Create File '{path}' | Error: {e}\n"
                ));
                Err(Error::FileCreation {
                    path: native,
                    source: Box::new(e),
                })
            }
        }
    }

    /// Normalize and validate, reporting the decision to the diagnostics.
    fn first_step(&self, raw: &str, kind: PathKind) -> Result<Normalization> {
        self.diagnostics
            .normal(format!("Start Create {kind} Path '{raw}'"));

        let decision = normalize(raw, &self.root);
        match &decision {
            Ok(Normalization::AlreadyExists(path)) => {
                self.diagnostics
                    .success(format!("\t{kind} '{path}' Already Exist\n"));
            }
            Ok(Normalization::Proceed(_)) => {}
            Err(e) => {
                tracing::debug!(path = raw, error = %e, "path rejected");
                self.diagnostics.error(format!("\t{kind} {e}\n"));
            }
        }
        decision
    }

    /// Create each directory level of an already validated path in order.
    ///
    /// Stops at the first level that cannot be created; levels created
    /// before that are left in place.
    pub(crate) fn create_dirs(&self, path: &NormalizedPath) -> Result<()> {
        for prefix in path.prefixes() {
            let native = prefix.resolve(&self.root);
            if native.exists() {
                self.diagnostics
                    .success(format!("\tDirectory '{prefix}' Already Exist."));
                continue;
            }

            if let Err(source) = fs::create_dir(&native) {
                self.diagnostics.error(format!(
                    "\tError To Create Directory '{prefix}' | Error Message : {source}\n"
                ));
                return Err(Error::DirectoryCreation {
                    path: native,
                    source,
                });
            }
            tracing::debug!(path = %native.display(), "created directory");
            self.diagnostics
                .success(format!("\tDirectory '{prefix}' Was Created."));
        }
        Ok(())
    }

    fn render<C: Serialize + ?Sized>(&self, path: &NormalizedPath, content: &C) -> Result<String> {
        let to_error = |source: serde_json::Error| Error::Serialize {
            path: path.resolve(&self.root),
            source,
        };

        if FileKind::Json.matches(path.as_str()) {
            return if self.pretty_json {
                serde_json::to_string_pretty(content).map_err(to_error)
            } else {
                serde_json::to_string(content).map_err(to_error)
            };
        }

        match serde_json::to_value(content).map_err(to_error)? {
            Value::String(text) => Ok(text),
            other => Ok(other.to_string()),
        }
    }
}

impl Default for PathCreator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn creator(temp: &TempDir) -> PathCreator {
        PathCreator::with_diagnostics(Diagnostics::silent()).with_root(temp.path())
    }

    #[test]
    fn test_make_dir_creates_nested_levels() {
        let temp = TempDir::new().unwrap();
        assert!(creator(&temp).make_dir("a/b/c"));
        assert!(temp.path().join("a/b/c").is_dir());
    }

    #[test]
    fn test_make_file_writes_text_verbatim() {
        let temp = TempDir::new().unwrap();
        assert!(creator(&temp).make_file("notes/hello.txt", "Hello, World!"));
        let content = fs::read_to_string(temp.path().join("notes/hello.txt")).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_make_file_serializes_json() {
        let temp = TempDir::new().unwrap();
        assert!(creator(&temp).make_file("config.JSON", &json!({"name": "demo"})));
        let content = fs::read_to_string(temp.path().join("config.JSON")).unwrap();
        assert_eq!(content, r#"{"name":"demo"}"#);
    }

    #[test]
    fn test_make_file_coerces_non_string_text() {
        let temp = TempDir::new().unwrap();
        assert!(creator(&temp).make_file("count.txt", &42));
        let content = fs::read_to_string(temp.path().join("count.txt")).unwrap();
        assert_eq!(content, "42");
    }

    #[test]
    fn test_make_file_pretty_json() {
        let temp = TempDir::new().unwrap();
        let creator = creator(&temp).with_pretty_json(true);
        assert!(creator.make_file("p.json", &json!({"a": 1})));
        let content = fs::read_to_string(temp.path().join("p.json")).unwrap();
        assert_eq!(content, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_try_make_dir_reports_empty_path() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(creator(&temp).try_make_dir("///"), Err(Error::EmptyPath)));
    }
}
