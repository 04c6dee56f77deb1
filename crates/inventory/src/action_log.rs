//! Caller-held action log.
//!
//! Separate from the process log file: a caller that wants an in-memory audit
//! trail of its own mutations passes a [`LogSink`] into the store.

use chrono::{DateTime, Utc};

/// One timestamped description of a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub recorded_at: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new(recorded_at: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            recorded_at,
            message: message.into(),
        }
    }

    pub fn now(message: impl Into<String>) -> Self {
        Self::new(Utc::now(), message)
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.recorded_at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.message
        )
    }
}

/// Destination for action log entries.
pub trait LogSink {
    fn record(&mut self, entry: LogEntry);
}

impl LogSink for Vec<LogEntry> {
    fn record(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

/// Ordered, append-only list of log entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    entries: Vec<LogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }
}

impl LogSink for ActionLog {
    fn record(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }
}
