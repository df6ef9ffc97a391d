//! Diagnostics - the sink the engine reports through instead of printing.
//!
//! Components receive a [`DiagnosticSink`] rather than writing to stdout. The
//! default [`TracingSink`] forwards to `tracing`; [`MemorySink`] captures
//! messages so tests can assert on them.

use std::sync::{Arc, Mutex};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// A single message emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Destination for engine diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);

    fn info(&self, message: String) {
        self.emit(Diagnostic::new(Level::Info, message));
    }

    fn warn(&self, message: String) {
        self.emit(Diagnostic::new(Level::Warn, message));
    }

    fn error(&self, message: String) {
        self.emit(Diagnostic::new(Level::Error, message));
    }
}

/// Forwards diagnostics to the `tracing` subscriber installed by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Info => tracing::info!(target: "board_core", "{}", diagnostic.message),
            Level::Warn => tracing::warn!(target: "board_core", "{}", diagnostic.message),
            Level::Error => tracing::error!(target: "board_core", "{}", diagnostic.message),
        }
    }
}

/// Collects diagnostics in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics captured so far, oldest first.
    pub fn records(&self) -> Vec<Diagnostic> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages at or above `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|d| d.level >= level)
            .map(|d| d.message)
            .collect()
    }

    /// Check if any captured message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.records().iter().any(|d| d.message.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        match self.records.lock() {
            Ok(mut records) => records.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
