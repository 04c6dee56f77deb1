//! Human-readable stock listing.

use crate::stock::StockTable;

pub const REPORT_HEADER: &str = "Items Report:";

/// Borrowed view of a stock table that renders as the console report:
/// a blank line, the header, then one `<item> -> <qty>` line per entry.
#[derive(Debug, Clone, Copy)]
pub struct StockReport<'a> {
    table: &'a StockTable,
}

impl<'a> StockReport<'a> {
    pub fn new(table: &'a StockTable) -> Self {
        Self { table }
    }
}

impl core::fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{REPORT_HEADER}")?;
        for (item, qty) in self.table.iter() {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}
