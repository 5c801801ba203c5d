//! Database Tests
//!
//! - Opening a directory with a seed fixture
//! - Custom metadata collection name
//! - Capture after submissions reseeds to the same state

use crate::common::*;

#[test]
fn open_with_seed_serves_field_api() {
    let disk = DiskDb::with_seed();
    let api = FieldApi::new(disk.open().unwrap());

    let values = api.lookup_values("case", 5, ["status", "customer.name"]).unwrap();
    assert_eq!(values.get("status"), Some(&Value::from("open")));
    assert_eq!(values.get("customer.name"), Some(&Value::from("Acme")));
}

#[test]
fn reopen_reloads_seed_not_submissions() {
    let disk = DiskDb::with_seed();
    FieldApi::new(disk.open().unwrap())
        .submit_field("case", 5, "status", "closed", false)
        .unwrap();

    let api = FieldApi::new(disk.open().unwrap());
    assert_eq!(api.lookup_text("case", 5, "status").unwrap(), "open");
}

#[test]
fn open_empty_directory() {
    let disk = DiskDb::new();
    let api = FieldApi::new(disk.open().unwrap());

    assert!(disk.dir.path().join(CONFIG_FILE_NAME).exists());
    let err = api.lookup_field("case", 5, "status", false).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidRecordType));
}

#[test]
fn custom_metadata_collection() {
    let disk = DiskDb::new();
    let cfg = RecordbaseConfig {
        metadata_collection: "_types".to_string(),
        seed: None,
    };
    let db = Database::open_with_config(disk.dir.path(), cfg).unwrap();

    let fixture = Fixture::new()
        .with("_types", serde_json::json!({"code": "case", "fields": [{"code": "status"}]}))
        .with("case", serde_json::json!({"internalid": 1, "status": "new"}));
    db.seed(&fixture).unwrap();

    let api = FieldApi::new(db.clone());
    assert_eq!(api.lookup_text("case", 1, "status").unwrap(), "new");
    assert!(db.source().find("__metadata", &Predicate::All).is_empty());
}

#[test]
fn capture_reflects_submissions() {
    let t = TestDb::new();
    t.api.submit_field("case", 5, "status", "closed", false).unwrap();

    let copy = TestDb::from_fixture(&t.db.capture().unwrap());
    assert_eq!(copy.api.lookup_text("case", 5, "status").unwrap(), "closed");
    let values = copy.api.lookup_values("case", 5, ["customer.name"]).unwrap();
    assert_eq!(values.get("customer.name"), Some(&Value::from("Acme")));
}

#[test]
fn malformed_seed_fails_to_open() {
    let disk = DiskDb::new();
    std::fs::write(disk.dir.path().join("seed.json"), "[1, 2, 3]").unwrap();
    std::fs::write(
        disk.dir.path().join(CONFIG_FILE_NAME),
        "seed = \"seed.json\"\n",
    )
    .unwrap();

    assert!(matches!(disk.open().unwrap_err(), Error::Serialization(_)));
}
