//! The owned inventory store and its stock operations.

use std::io::{self, Write};
use std::path::Path;

use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult};

use crate::action_log::{LogEntry, LogSink};
use crate::persistence::{self, PersistenceError};
use crate::report::StockReport;
use crate::stock::StockTable;

/// Item name used when an add request does not name one.
pub const DEFAULT_ITEM: &str = "default";

/// Quantity used when an add request does not give one.
pub const DEFAULT_QTY: i64 = 0;

pub use stockroom_core::config::DEFAULT_LOW_STOCK_THRESHOLD;

/// A single add request.
///
/// `Default` is the unspecified call: item `"default"`, quantity `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub item: String,
    pub qty: i64,
}

impl Default for AddRequest {
    fn default() -> Self {
        Self {
            item: DEFAULT_ITEM.to_string(),
            qty: DEFAULT_QTY,
        }
    }
}

impl AddRequest {
    pub fn new(item: impl Into<String>, qty: i64) -> Self {
        Self {
            item: item.into(),
            qty,
        }
    }

    /// Build a request from untyped JSON values.
    ///
    /// `None` means "not given" and falls back to the default. The item must be
    /// a JSON string and the quantity a JSON integer that fits in `i64`.
    pub fn from_values(item: Option<&JsonValue>, qty: Option<&JsonValue>) -> DomainResult<Self> {
        let item = match item {
            None => DEFAULT_ITEM.to_string(),
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "item must be text, got {other}"
                )));
            }
        };

        let qty = match qty {
            None => DEFAULT_QTY,
            Some(JsonValue::Number(n)) => n.as_i64().ok_or_else(|| {
                DomainError::validation(format!("qty must be an integer, got {n}"))
            })?,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "qty must be an integer, got {other}"
                )));
            }
        };

        Ok(Self { item, qty })
    }
}

/// Outcome of a successful [`InventoryStore::remove_item`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Some stock remains.
    Partial { remaining: i64 },
    /// Quantity reached zero or below; the item is gone.
    Completely,
}

/// In-memory inventory: the stock table plus the operations on it.
///
/// Every key in the table has a strictly positive quantity. Mutations that
/// would leave an item at zero or below remove it instead.
///
/// No operation panics. Failures are logged through `tracing` where they
/// happen and returned to the caller; the table is untouched on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    table: StockTable,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing table (entries at or below zero are dropped).
    pub fn from_table(table: StockTable) -> Self {
        let mut store = Self::new();
        store.replace_with(table);
        store
    }

    pub fn table(&self) -> &StockTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.table.contains(item)
    }

    /// Sum of all quantities in stock.
    ///
    /// Widened to `i128`: each quantity fits in `i64`, their sum need not.
    pub fn total_units(&self) -> i128 {
        self.table.iter().map(|(_, qty)| i128::from(qty)).sum()
    }

    /// Add `qty` of `item`, returning the resulting quantity.
    ///
    /// Negative and zero quantities are accepted. A result at or below zero
    /// removes the item, same as [`remove_item`](Self::remove_item).
    pub fn add_item(
        &mut self,
        item: &str,
        qty: i64,
        sink: Option<&mut dyn LogSink>,
    ) -> DomainResult<i64> {
        self.add(AddRequest::new(item, qty), sink)
    }

    /// Add from untyped values; a type mismatch is a logged no-op.
    pub fn add_item_value(
        &mut self,
        item: Option<&JsonValue>,
        qty: Option<&JsonValue>,
        sink: Option<&mut dyn LogSink>,
    ) -> DomainResult<i64> {
        let request = AddRequest::from_values(item, qty).inspect_err(|err| {
            tracing::warn!(
                "Invalid data types for add_item: item={}, qty={}: {err}",
                display_value(item),
                display_value(qty)
            );
        })?;
        self.add(request, sink)
    }

    /// Apply an [`AddRequest`].
    pub fn add(&mut self, request: AddRequest, sink: Option<&mut dyn LogSink>) -> DomainResult<i64> {
        let AddRequest { item, qty } = request;

        if item.trim().is_empty() {
            tracing::warn!("Invalid item name for add_item: {item:?}, qty={qty}");
            return Err(DomainError::validation("item name cannot be empty"));
        }

        let current = self.table.get(&item).unwrap_or(0);
        let Some(updated) = current.checked_add(qty) else {
            tracing::error!("Error adding {qty} of {item}: quantity overflow");
            return Err(DomainError::overflow(item));
        };

        if let Some(sink) = sink {
            sink.record(LogEntry::now(format!("Added {qty} of {item}")));
        }
        tracing::info!("Added {qty} of {item} to inventory.");

        if updated > 0 {
            self.table.insert(item, updated);
        } else if self.table.remove(&item).is_some() {
            tracing::info!("Removed {item} completely from inventory.");
        }

        Ok(updated)
    }

    /// Take `qty` of `item` out of stock.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> DomainResult<Removal> {
        let Some(current) = self.table.get(item) else {
            tracing::warn!("Attempted to remove non-existent item: {item}");
            return Err(DomainError::not_found(item));
        };

        let Some(remaining) = current.checked_sub(qty) else {
            tracing::error!("Error removing item {item}: quantity overflow");
            return Err(DomainError::overflow(item));
        };

        if remaining <= 0 {
            self.table.remove(item);
            tracing::info!("Removed {item} completely from inventory.");
            Ok(Removal::Completely)
        } else {
            self.table.insert(item, remaining);
            tracing::info!("Removed {qty} of {item} from inventory.");
            Ok(Removal::Partial { remaining })
        }
    }

    /// Current quantity of `item`, or `None` if it is not in stock.
    pub fn get_qty(&self, item: &str) -> Option<i64> {
        self.table.get(item)
    }

    /// Items whose quantity is strictly below `threshold`, in table order.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.table
            .iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    /// [`check_low_items`](Self::check_low_items) at the default threshold.
    pub fn low_items(&self) -> Vec<String> {
        self.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Empty the table.
    pub fn reset(&mut self) {
        self.table.clear();
        tracing::info!("Inventory reset.");
    }

    /// Clear the table and repopulate it from `table`.
    ///
    /// Entries at or below zero are skipped with a warning. Returns how many
    /// entries were kept.
    pub fn replace_with(&mut self, table: StockTable) -> usize {
        self.table.clear();
        for (item, qty) in table {
            if qty > 0 {
                self.table.insert(item, qty);
            } else {
                tracing::warn!("Skipping {item}: non-positive quantity {qty}");
            }
        }
        tracing::info!("Inventory replaced with {} items.", self.table.len());
        self.table.len()
    }

    pub fn report(&self) -> StockReport<'_> {
        StockReport::new(&self.table)
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.report())
    }

    /// Print the report to stdout.
    pub fn print_data(&self) {
        let stdout = io::stdout();
        if let Err(err) = self.write_report(&mut stdout.lock()) {
            tracing::error!("Error printing inventory report: {err}");
        }
    }

    /// Persist the table to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        persistence::save_data(&self.table, path)
    }

    /// Replace the table with what is stored at `path`.
    ///
    /// On failure the table is cleared, matching a reload from an empty file.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        match persistence::load_data(path) {
            Ok(loaded) => Ok(self.replace_with(loaded)),
            Err(err) => {
                self.replace_with(StockTable::new());
                Err(err)
            }
        }
    }
}

fn display_value(value: Option<&JsonValue>) -> String {
    value.map_or_else(|| "<unset>".to_string(), JsonValue::to_string)
}
