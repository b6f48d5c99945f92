//! JSON file handle (read | write)
//!
//! The file is created holding the initial value if it does not exist when
//! the handle is constructed.

use crate::config::JsonOptions;
use crate::constants::FileKind;
use crate::handle::ManagedFile;
use crate::{Error, Result, io};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// A handle bound to one `.json` file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    file: ManagedFile,
    pretty: bool,
}

impl JsonFile {
    /// Bind `path` with default options (`{}` as initial value).
    pub fn new(path: &str) -> Self {
        Self::with_options(path, JsonOptions::default())
    }

    pub fn with_options(path: &str, options: JsonOptions) -> Self {
        Self {
            file: ManagedFile::open(path, FileKind::Json, &options),
            pretty: options.pretty,
        }
    }

    /// Path as given at construction.
    pub fn path(&self) -> &str {
        self.file.raw()
    }

    /// Resolved path used for I/O.
    pub fn native_path(&self) -> &Path {
        self.file.native()
    }

    /// Read and parse the file.
    ///
    /// Returns `None` if the path is invalid, the file cannot be read, or
    /// its content is not valid JSON.
    pub async fn read(&self) -> Option<Value> {
        self.try_read().await.ok()
    }

    /// Read and deserialize the file into `T`.
    pub async fn read_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.try_read_as().await.ok()
    }

    pub async fn try_read(&self) -> Result<Value> {
        self.try_read_as().await
    }

    pub async fn try_read_as<T: DeserializeOwned>(&self) -> Result<T> {
        self.file.check_path()?;

        let result = match io::read_text(self.file.native()).await {
            Ok(text) => serde_json::from_str(&text).map_err(|e| Error::read(self.file.native(), e)),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            self.file.report_read_error(e);
        }
        result
    }

    /// Serialize `data` and overwrite the file.
    ///
    /// Data serializing to `null` (including `None`) is rejected without
    /// touching the file.
    pub fn write<T: Serialize + ?Sized>(&self, data: &T) -> bool {
        self.try_write(data).is_ok()
    }

    pub fn try_write<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        };

        let text = match serialized {
            Ok(text) if text == "null" => {
                self.file
                    .diagnostics()
                    .error(format!("{} {}", FileKind::Json.error_id(), Error::NullData));
                return Err(Error::NullData);
            }
            Ok(text) => text,
            Err(source) => {
                let e = Error::Serialize {
                    path: self.file.native().to_path_buf(),
                    source,
                };
                self.file.report_write_error(&e);
                return Err(e);
            }
        };

        self.file.check_path()?;

        io::write_text(self.file.native(), &text).inspect_err(|e| self.file.report_write_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Level, RecordingSink};
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn options(temp: &TempDir) -> JsonOptions {
        JsonOptions::default().with_display(false).with_root(temp.path())
    }

    #[tokio::test]
    async fn test_malformed_json_reads_as_none() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("bad.json"), "{not json").unwrap();

        let file = JsonFile::with_options("bad.json", options(&temp));

        assert!(file.read().await.is_none());
        assert!(matches!(file.try_read().await, Err(Error::ReadFailure { .. })));
    }

    #[test]
    fn test_write_none_is_null_data() {
        let temp = TempDir::new().unwrap();
        let file = JsonFile::with_options("data.json", options(&temp));
        let nothing: Option<u32> = None;

        assert!(matches!(file.try_write(&nothing), Err(Error::NullData)));
    }

    #[test]
    fn test_invalid_extension_is_reported() {
        let temp = TempDir::new().unwrap();
        let sink = Arc::new(RecordingSink::new());
        let options = JsonOptions::default()
            .with_root(temp.path())
            .with_sink(sink.clone());

        let file = JsonFile::with_options("data.yaml", options);

        assert!(!file.write(&json!({"a": 1})));
        assert!(
            sink.at(Level::Error)
                .iter()
                .any(|m| m.contains("File must be json type"))
        );
    }
}
