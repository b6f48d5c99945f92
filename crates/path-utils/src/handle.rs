//! State shared by the JSON and text file handles

use crate::config::FileOptions;
use crate::constants::FileKind;
use crate::create::PathCreator;
use crate::diagnostics::Diagnostics;
use crate::path::NormalizedPath;
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file path bound to one kind of content.
#[derive(Debug, Clone)]
pub(crate) struct ManagedFile {
    raw: String,
    normalized: NormalizedPath,
    native: PathBuf,
    kind: FileKind,
    diagnostics: Diagnostics,
}

impl ManagedFile {
    /// Bind `raw` and create the file holding the initial value if it is absent.
    ///
    /// An invalid path is only reported; the handle is still returned and
    /// every later operation on it fails.
    pub(crate) fn open<T: Serialize>(raw: &str, kind: FileKind, options: &FileOptions<T>) -> Self {
        let normalized = NormalizedPath::new(raw);
        let file = Self {
            raw: raw.to_string(),
            native: normalized.resolve(&options.root),
            normalized,
            kind,
            diagnostics: options.diagnostics.clone(),
        };

        let _ = file.check_path();

        if !file.native.exists() {
            let creator = PathCreator::with_diagnostics(options.diagnostics.clone())
                .with_root(&options.root)
                .with_pretty_json(options.pretty);
            if !creator.make_file(raw, &options.initial_value) {
                tracing::warn!(path = raw, "initial file creation failed");
            }
        }

        file
    }

    /// Path as given by the caller.
    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    /// Resolved platform path used for I/O.
    pub(crate) fn native(&self) -> &Path {
        &self.native
    }

    pub(crate) fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Validate that the path is not blank and carries the right extension.
    ///
    /// Checked on the normalized form, so boundary separators are ignored.
    pub(crate) fn check_path(&self) -> Result<()> {
        let result = if self.normalized.is_blank() {
            Err(Error::EmptyPath)
        } else if !self.kind.matches(self.normalized.as_str()) {
            Err(Error::InvalidExtension {
                path: self.raw.clone(),
                expected: self.kind.extension(),
            })
        } else {
            Ok(())
        };

        if let Err(e) = &result {
            self.diagnostics
                .error(format!("{} {e}", self.kind.error_id()));
        }
        result
    }

    pub(crate) fn report_read_error(&self, error: &Error) {
        self.diagnostics.error(format!(
            "{} in Read data From '{}'\nError Message : '{error}'",
            self.kind.error_id(),
            self.raw
        ));
    }

    pub(crate) fn report_write_error(&self, error: &Error) {
        self.diagnostics.error(format!(
            "{} in Write data In '{}'\nError Message : '{error}'",
            self.kind.error_id(),
            self.raw
        ));
    }
}
