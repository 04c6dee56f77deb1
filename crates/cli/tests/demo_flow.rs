use serde_json::json;
use stockroom_cli::demo;
use stockroom_core::InventoryConfig;

struct Workspace {
    _dir: tempfile::TempDir,
    config: InventoryConfig,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = InventoryConfig {
            data_path: dir.path().join("inventory.json"),
            log_path: dir.path().join("inventory.log"),
            ..InventoryConfig::default()
        };
        Self { _dir: dir, config }
    }
}

#[test]
fn demo_prints_expected_console_output() {
    let ws = Workspace::new();
    let mut out = Vec::new();

    demo::run(&ws.config, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Apple stock: 7\n\
         Low items: [\"banana\", \"orange\"]\n\
         \n\
         Items Report:\n\
         apple -> 7\n\
         banana -> 2\n\
         orange -> 1\n"
    );
}

#[test]
fn demo_persists_table_and_reloads_it() {
    let ws = Workspace::new();
    let mut out = Vec::new();

    let outcome = demo::run(&ws.config, &mut out).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&ws.config.data_path).unwrap()).unwrap();
    assert_eq!(saved, json!({ "apple": 7, "banana": 2, "orange": 1 }));

    assert_eq!(outcome.store.get_qty("apple"), Some(7));
    assert_eq!(outcome.store.get_qty("mango"), None);
    assert_eq!(outcome.store.len(), 3);
}

#[test]
fn demo_records_one_action_per_add() {
    let ws = Workspace::new();
    let mut out = Vec::new();

    let outcome = demo::run(&ws.config, &mut out).unwrap();

    assert_eq!(
        outcome.actions.messages().collect::<Vec<_>>(),
        vec!["Added 10 of apple", "Added 2 of banana", "Added 1 of orange"]
    );
}

#[test]
fn demo_overwrites_existing_data_file() {
    let ws = Workspace::new();
    std::fs::write(&ws.config.data_path, r#"{"stale": 40}"#).unwrap();
    let mut out = Vec::new();

    let outcome = demo::run(&ws.config, &mut out).unwrap();

    assert!(!outcome.store.contains("stale"));
    assert_eq!(outcome.store.total_units(), 10);
}

#[test]
fn demo_survives_unwritable_data_path() {
    let ws = Workspace::new();
    let config = InventoryConfig {
        data_path: ws.config.data_path.with_file_name("missing-dir").join("inventory.json"),
        ..ws.config.clone()
    };
    let mut out = Vec::new();

    let outcome = demo::run(&config, &mut out).unwrap();

    // Save failed, so the reload found nothing.
    assert!(outcome.store.is_empty());
    assert!(String::from_utf8(out).unwrap().ends_with("Items Report:\n"));
}
