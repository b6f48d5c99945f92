//! Constants and enums shared by the path and file helpers.

/// Path separator used by the internal representation.
pub const SEPARATOR: char = '/';

/// Prefix for directory listing error messages.
pub const READDIR_ERROR_ID: &str = "READDIR ERROR:";

/// What kind of filesystem entry a path is being created as.
///
/// Only used to label diagnostic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
}

impl PathKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "Directory",
            Self::File => "File",
        }
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File kinds managed by the file handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A `.json` file holding one serialized value
    Json,
    /// A `.txt` file holding raw text
    Text,
}

impl FileKind {
    /// Extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// Prefix used on diagnostic messages emitted by the matching handle.
    pub fn error_id(&self) -> &'static str {
        match self {
            Self::Json => "JsonFile ERROR :",
            Self::Text => "TextFile ERROR :",
        }
    }

    /// Case-insensitive check that `path` ends with `.<extension>`.
    pub fn matches(&self, path: &str) -> bool {
        let suffix = self.extension();
        let Some(split) = path.len().checked_sub(suffix.len() + 1) else {
            return false;
        };
        path.get(split..)
            .map(|tail| tail.starts_with('.') && tail[1..].eq_ignore_ascii_case(suffix))
            .unwrap_or(false)
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
