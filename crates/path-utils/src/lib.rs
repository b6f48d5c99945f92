//! Filesystem convenience helpers
//!
//! Creates complete directory and file paths, manages JSON and text files
//! through lazily created handles, and lists directory entries.

pub mod config;
pub mod constants;
pub mod create;
pub mod diagnostics;
pub mod dir;
pub mod error;
pub mod io;
pub mod json_file;
pub mod lock;
pub mod logging;
pub mod path;
pub mod text_file;

mod handle;

pub use config::{FileOptions, JsonOptions, TextOptions};
pub use constants::{FileKind, PathKind};
pub use create::PathCreator;
pub use diagnostics::{DiagnosticSink, Diagnostics, NoopSink, TracingSink};
pub use dir::{DirectoryListing, read_directory};
pub use error::{Error, Result};
pub use json_file::JsonFile;
pub use lock::PathLocks;
pub use path::{NormalizedPath, Normalization, normalize};
pub use text_file::TextFile;
