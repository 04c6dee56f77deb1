//! Tracing and logging (shared setup).

use std::path::Path;

/// Initialize process-wide logging to the append-only log file at `log_path`.
///
/// Safe to call multiple times; subsequent calls leave the first subscriber
/// in place. Fails only if the log file cannot be opened.
pub fn init(log_path: &Path) -> std::io::Result<()> {
    tracing::init(log_path)
}

/// Tracing configuration (filters, line format, file writer).
pub mod tracing;

pub use crate::tracing::LineFormat;
