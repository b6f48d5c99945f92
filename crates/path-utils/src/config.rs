//! Construction options for the file handles

use crate::diagnostics::{DiagnosticSink, Diagnostics};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;

/// Options a file handle receives once at construction.
///
/// `root` is the directory relative paths are resolved against; it
/// defaults to the current working directory.
#[derive(Debug, Clone)]
pub struct FileOptions<T> {
    /// Content written when the file does not exist yet
    pub initial_value: T,
    pub diagnostics: Diagnostics,
    pub root: PathBuf,
    /// Pretty-print JSON output (ignored by text handles)
    pub pretty: bool,
}

/// Options for [`JsonFile`](crate::JsonFile); `initial_value` defaults to `{}`.
pub type JsonOptions = FileOptions<Value>;

/// Options for [`TextFile`](crate::TextFile); `initial_value` defaults to `""`.
pub type TextOptions = FileOptions<String>;

impl<T> FileOptions<T> {
    pub fn new(initial_value: T) -> Self {
        Self {
            initial_value,
            diagnostics: Diagnostics::default(),
            root: PathBuf::from("."),
            pretty: false,
        }
    }

    pub fn with_initial_value(mut self, initial_value: T) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = self.diagnostics.with_sink(sink);
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.diagnostics = self.diagnostics.with_display(display);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for FileOptions<Value> {
    fn default() -> Self {
        Self::new(json!({}))
    }
}

impl Default for FileOptions<String> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_defaults() {
        let options = JsonOptions::default();
        assert_eq!(options.initial_value, json!({}));
        assert_eq!(options.root, PathBuf::from("."));
        assert!(options.diagnostics.is_enabled());
        assert!(!options.pretty);
    }

    #[test]
    fn test_text_builder() {
        let options = TextOptions::default()
            .with_initial_value("hello".to_string())
            .with_display(false)
            .with_root("/tmp/base");
        assert_eq!(options.initial_value, "hello");
        assert!(!options.diagnostics.is_enabled());
        assert_eq!(options.root, PathBuf::from("/tmp/base"));
    }
}
