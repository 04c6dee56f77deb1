//! Fixed demonstration run.
//!
//! Adds three items, removes from one present and one missing item, reports
//! the apple level and the low items, then saves, reloads (replacing the
//! in-memory table) and prints the final report.
//!
//! Stock operations never abort the run: their failures are already logged by
//! the store and are ignored here. Only a broken output stream is an error.

use std::io::Write;

use anyhow::Context;

use stockroom_core::InventoryConfig;
use stockroom_inventory::{ActionLog, InventoryStore, load_or_default};

/// What the run leaves behind.
#[derive(Debug)]
pub struct DemoOutcome {
    /// Store after the reload from disk.
    pub store: InventoryStore,
    /// Entries recorded by the add calls.
    pub actions: ActionLog,
}

pub fn run<W: Write>(config: &InventoryConfig, out: &mut W) -> anyhow::Result<DemoOutcome> {
    let mut store = InventoryStore::new();
    let mut actions = ActionLog::new();

    let _ = store.add_item("apple", 10, Some(&mut actions));
    let _ = store.add_item("banana", 2, Some(&mut actions));
    let _ = store.add_item("orange", 1, Some(&mut actions));
    let _ = store.remove_item("apple", 3);
    let _ = store.remove_item("mango", 1);

    let apple = match store.get_qty("apple") {
        Some(qty) => writeln!(out, "Apple stock: {qty}"),
        None => writeln!(out, "Apple not found in inventory."),
    };
    apple.context("failed to write apple stock")?;

    let low = store.check_low_items(config.low_stock_threshold);
    writeln!(out, "Low items: {low:?}").context("failed to write low items")?;

    let _ = store.save(&config.data_path);

    let loaded = load_or_default(&config.data_path);
    store.replace_with(loaded);

    store
        .write_report(out)
        .context("failed to write inventory report")?;

    Ok(DemoOutcome { store, actions })
}
