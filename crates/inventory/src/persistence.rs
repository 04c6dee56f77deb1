//! JSON persistence for the stock table.
//!
//! The data file is a single JSON object mapping item names to integer
//! quantities, pretty-printed with 4-space indentation. Reads and writes are
//! whole-file; there is no locking and no partial-write recovery.
//!
//! Failures are logged here, at the point they happen, and returned as
//! [`PersistenceError`]. Callers that only want the "empty on failure"
//! behaviour use [`load_or_default`].

use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::stock::StockTable;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("data file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize stock table: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PersistenceError {
    fn emit(&self) {
        match self {
            PersistenceError::NotFound { path } => {
                tracing::warn!(
                    "File {} not found. Starting with an empty inventory.",
                    path.display()
                );
            }
            PersistenceError::Read { path, source } => {
                tracing::error!("Error reading data from {}: {source}", path.display());
            }
            PersistenceError::Write { path, source } => {
                tracing::error!("Error saving data to {}: {source}", path.display());
            }
            PersistenceError::Parse { path, source } => {
                tracing::error!("Error decoding JSON file {}: {source}", path.display());
            }
            PersistenceError::Serialize(source) => {
                tracing::error!("Error serializing inventory data: {source}");
            }
        }
    }
}

/// Read the stock table stored at `path`.
///
/// Entries whose value is not an integer are skipped with a warning; the rest
/// of the file still loads.
pub fn load_data(path: impl AsRef<Path>) -> Result<StockTable, PersistenceError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                PersistenceError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PersistenceError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
        .inspect_err(PersistenceError::emit)?;

    let entries: IndexMap<String, JsonValue> = serde_json::from_str(&raw)
        .map_err(|source| PersistenceError::Parse {
            path: path.to_path_buf(),
            source,
        })
        .inspect_err(PersistenceError::emit)?;

    let mut table = StockTable::new();
    for (item, value) in entries {
        match value.as_i64() {
            Some(qty) => {
                table.insert(item, qty);
            }
            None => {
                tracing::warn!(
                    "Skipping {item} in {}: quantity {value} is not an integer",
                    path.display()
                );
            }
        }
    }

    tracing::info!("Inventory data loaded successfully from {}", path.display());
    Ok(table)
}

/// [`load_data`], degraded to an empty table on any failure.
pub fn load_or_default(path: impl AsRef<Path>) -> StockTable {
    load_data(path).unwrap_or_default()
}

/// Write `table` to `path`, replacing whatever was there.
pub fn save_data(table: &StockTable, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    table
        .serialize(&mut serializer)
        .map_err(PersistenceError::Serialize)
        .inspect_err(PersistenceError::emit)?;

    std::fs::write(path, &buf)
        .map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })
        .inspect_err(PersistenceError::emit)?;

    tracing::info!("Inventory data saved successfully to {}", path.display());
    Ok(())
}
