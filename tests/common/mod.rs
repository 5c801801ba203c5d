//! Shared test utilities for integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::{Arc, Once};

pub use recordbase::{
    Database, DocumentSource, Error, ErrorKind, FieldApi, FieldLookup, FieldSpec, FieldValues,
    Fixture, Predicate, Record, RecordTypeDescriptor, RecordbaseConfig, Value, ValueSpec,
    CONFIG_FILE_NAME,
};
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test writer subscriber once per test binary.
///
/// Output shows up with `--nocapture`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Cases joined to customers and employees, plus an unregistered join target.
///
/// - case 5: open, customer 7, assignee 40
/// - case 6: closed, customer 8 (missing), no assignee
/// - customer 7: Acme, gold tier
/// - employee 40: dana@example.com
pub fn support_fixture() -> Fixture {
    Fixture::new()
        .with(
            "__metadata",
            json!({"code": "case", "fields": [
                {"code": "status"},
                {"code": "title"},
                {"code": "customer", "recordType": "customer"},
                {"code": "assignee", "recordType": "employee"},
                {"code": "vendor", "recordType": "vendor"}
            ]}),
        )
        .with(
            "__metadata",
            json!({"code": "customer", "fields": [{"code": "name"}, {"code": "tier"}]}),
        )
        .with("__metadata", json!({"code": "employee", "fields": [{"code": "email"}]}))
        .with(
            "case",
            json!({"internalid": 5, "status": "open", "title": "Login fails",
                   "customer": 7, "assignee": 40, "vendor": 3}),
        )
        .with(
            "case",
            json!({"internalid": 6, "status": "closed", "customer": 8}),
        )
        .with(
            "customer",
            json!({"internalid": 7, "name": "Acme", "tier": "gold"}),
        )
        .with(
            "employee",
            json!({"internalid": 40, "email": "dana@example.com"}),
        )
}

// ============================================================================
// TestDb
// ============================================================================

/// In-memory database seeded with [`support_fixture`].
pub struct TestDb {
    pub db: Arc<Database>,
    pub api: FieldApi,
}

impl TestDb {
    pub fn new() -> Self {
        Self::from_fixture(&support_fixture())
    }

    pub fn from_fixture(fixture: &Fixture) -> Self {
        init_tracing();
        let db = Database::from_fixture(fixture).expect("fixture loads");
        let api = FieldApi::new(db.clone());
        Self { db, api }
    }

    /// Stored copy of one record, bypassing the field API
    pub fn record(&self, record_type: &str, id: i64) -> Option<Record> {
        self.db
            .source()
            .find(record_type, &Predicate::internal_id(id))
            .into_iter()
            .next()
    }
}

/// Directory-backed database for open/config tests.
pub struct DiskDb {
    pub dir: TempDir,
}

impl DiskDb {
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    /// Write the support fixture next to a config that seeds from it
    pub fn with_seed() -> Self {
        let disk = Self::new();
        std::fs::write(
            disk.dir.path().join("seed.json"),
            support_fixture().to_json_pretty().expect("fixture renders"),
        )
        .expect("write seed");
        std::fs::write(
            disk.dir.path().join(CONFIG_FILE_NAME),
            "seed = \"seed.json\"\n",
        )
        .expect("write config");
        disk
    }

    pub fn open(&self) -> recordbase::Result<Arc<Database>> {
        Database::open(self.dir.path())
    }
}
