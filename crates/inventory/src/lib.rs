//! Inventory domain module.
//!
//! An owned, in-memory stock table with add/remove/query operations, JSON
//! persistence and an optional caller-held action log. Single-threaded by
//! construction: mutation goes through `&mut InventoryStore`.

pub mod action_log;
pub mod persistence;
pub mod report;
pub mod stock;
pub mod store;

pub use action_log::{ActionLog, LogEntry, LogSink};
pub use persistence::{PersistenceError, load_data, load_or_default, save_data};
pub use report::StockReport;
pub use stock::StockTable;
pub use store::{AddRequest, DEFAULT_ITEM, DEFAULT_QTY, InventoryStore, Removal};
