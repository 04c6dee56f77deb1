//! The stock table: item name to quantity, in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from item name to quantity.
///
/// Iteration follows insertion order so reports and low-stock listings are
/// reproducible. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockTable(IndexMap<String, i64>);

impl StockTable {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, item: &str) -> Option<i64> {
        self.0.get(item).copied()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Set the quantity for `item`. An existing key keeps its position.
    pub fn insert(&mut self, item: impl Into<String>, qty: i64) -> Option<i64> {
        self.0.insert(item.into(), qty)
    }

    /// Remove `item`, preserving the order of the remaining entries.
    pub fn remove(&mut self, item: &str) -> Option<i64> {
        self.0.shift_remove(item)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(String, i64)> for StockTable {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StockTable {
    type Item = (String, i64);
    type IntoIter = indexmap::map::IntoIter<String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
