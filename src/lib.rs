//! Recordbase - metadata-driven field access over an embedded document store
//!
//! Records live in named collections, one per record type. A reserved
//! metadata collection describes each type's fields, including which fields
//! reference records of another type. On top of that, [`FieldApi`] looks up
//! fields (following `source.target` joins) and submits field values.
//!
//! # Quick Start
//!
//! ```
//! use recordbase::{Database, FieldApi, Fixture, Value};
//! use serde_json::json;
//!
//! let fixture = Fixture::new()
//!     .with("__metadata", json!({"code": "case", "fields": [
//!         {"code": "status"},
//!         {"code": "customer", "recordType": "customer"}
//!     ]}))
//!     .with("__metadata", json!({"code": "customer", "fields": [{"code": "name"}]}))
//!     .with("case", json!({"internalid": 5, "status": "open", "customer": 7}))
//!     .with("customer", json!({"internalid": 7, "name": "Acme"}));
//!
//! let api = FieldApi::new(Database::from_fixture(&fixture)?);
//!
//! let values = api.lookup_values("case", 5, ["status", "customer.name"])?;
//! assert_eq!(values.get("customer.name"), Some(&Value::from("Acme")));
//!
//! api.submit_field("case", 5, "status", "closed", false)?;
//! assert_eq!(api.lookup_text("case", 5, "status")?, "closed");
//! # Ok::<(), recordbase::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `recordbase-core`: values, records, descriptors, predicates, errors
//! - `recordbase-storage`: the in-memory collection store
//! - `recordbase-engine`: database, metadata registry, fixtures, field API

pub use recordbase_core::{
    DocumentSource, Error, ErrorKind, FieldDescriptor, FieldSpec, Patch, Predicate, Record,
    RecordTypeDescriptor, Result, Value, ValueSpec, DEFAULT_METADATA_COLLECTION,
    INTERNAL_ID_FIELD, JOIN_DELIMITER,
};
pub use recordbase_engine::*;
pub use recordbase_storage::CollectionStore;
