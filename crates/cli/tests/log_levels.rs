use std::io;
use std::sync::{Arc, Mutex};

use serde_json::json;
use stockroom_inventory::{InventoryStore, load_data};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn logged_lines(run: impl FnOnce()) -> Vec<String> {
    let capture = LogCapture::default();
    let sub = stockroom_observability::tracing::subscriber(EnvFilter::new("info"), capture.clone());
    tracing::subscriber::with_default(sub, run);
    capture.lines()
}

fn assert_logged(lines: &[String], needle: &str) {
    assert!(
        lines.iter().any(|line| line.contains(needle)),
        "no log line contains {needle:?}; got {lines:#?}"
    );
}

#[test]
fn mutations_are_logged_at_info() {
    let lines = logged_lines(|| {
        let mut store = InventoryStore::new();
        let _ = store.add_item("apple", 10, None);
        let _ = store.remove_item("apple", 3);
        let _ = store.remove_item("apple", 7);
    });

    assert_logged(&lines, " - INFO - Added 10 of apple to inventory.");
    assert_logged(&lines, " - INFO - Removed 3 of apple from inventory.");
    assert_logged(&lines, " - INFO - Removed apple completely from inventory.");
}

#[test]
fn rejected_inputs_are_logged_at_warning() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.json");

    let lines = logged_lines(|| {
        let mut store = InventoryStore::new();
        let _ = store.remove_item("mango", 1);
        let _ = store.add_item_value(Some(&json!(42)), Some(&json!(1)), None);
        let _ = load_data(&absent);
    });

    assert_logged(&lines, " - WARNING - Attempted to remove non-existent item: mango");
    assert_logged(&lines, " - WARNING - Invalid data types for add_item: item=42, qty=1");
    assert_logged(&lines, " - WARNING - File ");
    assert!(lines.iter().all(|line| !line.contains(" - INFO - Added")));
}

#[test]
fn io_and_parse_failures_are_logged_at_error() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let unwritable = dir.path().join("missing-dir").join("inventory.json");

    let lines = logged_lines(|| {
        let mut store = InventoryStore::new();
        let _ = store.add_item("apple", 1, None);
        let _ = store.save(&unwritable);
        let _ = load_data(&broken);
    });

    assert_logged(&lines, " - ERROR - Error saving data to ");
    assert_logged(&lines, " - ERROR - Error decoding JSON file ");
}
