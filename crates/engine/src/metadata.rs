//! MetadataRegistry: record type descriptors stored in a reserved collection
//!
//! ## Design: STATELESS FACADE
//!
//! The registry holds only the document source and the reserved collection
//! name. Descriptors are stored as ordinary documents (`code`, `fields`)
//! with an assigned `internalid`, and read back with an equality filter on
//! `code`. Nothing is cached, so the registry always reflects the store.
//!
//! The field engines only ever call [`MetadataRegistry::describe`];
//! registration happens while the store is being initialized.

use std::sync::Arc;

use tracing::{debug, info};

use recordbase_core::{
    DocumentSource, Error, Predicate, Record, RecordTypeDescriptor, Result, Value,
    INTERNAL_ID_FIELD,
};

/// Record type descriptors backed by a reserved collection
#[derive(Clone)]
pub struct MetadataRegistry {
    source: Arc<dyn DocumentSource>,
    collection: String,
}

impl MetadataRegistry {
    /// Registry over `collection` in `source`
    pub fn new(source: Arc<dyn DocumentSource>, collection: impl Into<String>) -> Self {
        Self {
            source,
            collection: collection.into(),
        }
    }

    /// Name of the reserved collection
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Descriptor for `code`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecordType` if no descriptor matches, or
    /// `InvalidDocument` if the stored descriptor is malformed.
    pub fn describe(&self, code: &str) -> Result<RecordTypeDescriptor> {
        self.lookup(code)?.ok_or_else(|| {
            debug!(target: "recordbase::metadata", record_type = code, "Unknown record type");
            Error::invalid_record_type(code)
        })
    }

    /// Descriptor for `code`, `None` when not registered
    pub fn lookup(&self, code: &str) -> Result<Option<RecordTypeDescriptor>> {
        let found = self
            .source
            .find(&self.collection, &Predicate::eq("code", code));
        match found.into_iter().next() {
            Some(record) => self.decode(record).map(Some),
            None => Ok(None),
        }
    }

    /// Whether a descriptor for `code` exists
    pub fn contains(&self, code: &str) -> bool {
        !self
            .source
            .find(&self.collection, &Predicate::eq("code", code))
            .is_empty()
    }

    /// Store a new descriptor
    ///
    /// Returns the internal id assigned to the descriptor document.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecordType` if the code is taken, and
    /// `InvalidRecordType` for an empty code or the reserved collection name.
    pub fn register(&self, descriptor: &RecordTypeDescriptor) -> Result<i64> {
        if descriptor.code.is_empty() || descriptor.code == self.collection {
            return Err(Error::invalid_record_type(&descriptor.code));
        }
        if self.contains(&descriptor.code) {
            return Err(Error::DuplicateRecordType(descriptor.code.clone()));
        }

        let id = self
            .source
            .find(&self.collection, &Predicate::All)
            .iter()
            .map(Record::id)
            .max()
            .unwrap_or(0)
            + 1;
        self.source
            .insert(&self.collection, self.encode(id, descriptor)?)?;

        info!(
            target: "recordbase::metadata",
            record_type = %descriptor.code,
            fields = descriptor.fields.len(),
            id,
            "Record type registered"
        );
        Ok(id)
    }

    /// All registered descriptors, ordered by code
    pub fn descriptors(&self) -> Result<Vec<RecordTypeDescriptor>> {
        let mut descriptors = self
            .source
            .find(&self.collection, &Predicate::All)
            .into_iter()
            .map(|record| self.decode(record))
            .collect::<Result<Vec<_>>>()?;
        descriptors.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(descriptors)
    }

    fn encode(&self, id: i64, descriptor: &RecordTypeDescriptor) -> Result<Record> {
        match Value::from(serde_json::to_value(descriptor)?) {
            Value::Object(mut object) => {
                object.insert(INTERNAL_ID_FIELD.to_string(), Value::Int(id));
                Record::from_object(&self.collection, object)
            }
            other => Err(Error::invalid_document(
                &self.collection,
                format!("descriptor encoded as {}", other.type_name()),
            )),
        }
    }

    fn decode(&self, record: Record) -> Result<RecordTypeDescriptor> {
        let json = serde_json::Value::from(record.into_value());
        serde_json::from_value(json)
            .map_err(|e| Error::invalid_document(&self.collection, e.to_string()))
    }
}

impl std::fmt::Debug for MetadataRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataRegistry")
            .field("collection", &self.collection)
            .finish()
    }
}
