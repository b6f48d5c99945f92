//! Injectable diagnostic output
//!
//! Every component reports progress through a [`DiagnosticSink`]. Output is
//! advisory only: the value returned by an operation is always the
//! authoritative signal.

use std::sync::Arc;

/// Leveled message sink.
pub trait DiagnosticSink: Send + Sync {
    fn normal(&self, message: &str);
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn normal(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Sink that forwards messages to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn normal(&self, message: &str) {
        tracing::info!(target: "path_utils::display", "{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!(target: "path_utils::display", success = true, "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "path_utils::display", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "path_utils::display", "{message}");
    }
}

/// A sink plus the switch that enables it.
///
/// Cloning is cheap; components built from the same options share the sink.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<dyn DiagnosticSink>,
    display: bool,
}

impl Diagnostics {
    pub fn new(sink: Arc<dyn DiagnosticSink>, display: bool) -> Self {
        Self { sink, display }
    }

    /// Diagnostics that never print anything.
    pub fn silent() -> Self {
        Self::new(Arc::new(NoopSink), false)
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.display
    }

    pub fn normal(&self, message: impl AsRef<str>) {
        if self.display {
            self.sink.normal(message.as_ref());
        }
    }

    pub fn success(&self, message: impl AsRef<str>) {
        if self.display {
            self.sink.success(message.as_ref());
        }
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        if self.display {
            self.sink.warning(message.as_ref());
        }
    }

    pub fn error(&self, message: impl AsRef<str>) {
        if self.display {
            self.sink.error(message.as_ref());
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(Arc::new(NoopSink), true)
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

/// Sink that records every message, for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    messages: std::sync::Mutex<Vec<(Level, String)>>,
}

/// Level a recorded message was emitted at.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Normal,
    Success,
    Warning,
    Error,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Recorded messages at `level`.
    pub fn at(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn push(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }
}

#[cfg(test)]
impl DiagnosticSink for RecordingSink {
    fn normal(&self, message: &str) {
        self.push(Level::Normal, message);
    }

    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_diagnostics_record_nothing() {
        let sink = Arc::new(RecordingSink::new());
        let diagnostics = Diagnostics::new(sink.clone(), false);

        diagnostics.error("boom");
        diagnostics.success("done");

        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_enabled_diagnostics_keep_levels() {
        let sink = Arc::new(RecordingSink::new());
        let diagnostics = Diagnostics::default().with_sink(sink.clone());

        diagnostics.warning("careful");
        diagnostics.error("boom");

        assert_eq!(sink.at(Level::Warning), vec!["careful"]);
        assert_eq!(sink.at(Level::Error), vec!["boom"]);
    }
}
