//! CollectionStore: in-memory document collections keyed by internal id
//!
//! This module implements the DocumentSource trait using:
//! - `BTreeMap<String, Collection>` from record type code to collection
//! - `BTreeMap<i64, Record>` per collection, ordered by internal id
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **Owned reads**: `find` clones matching records, so callers can never
//!   mutate stored documents through a read
//! - **Keyed fast path**: predicates pinning an `internalid` are served by
//!   a map lookup instead of a scan
//! - **Single-call atomicity**: each call holds the lock for its whole
//!   duration; a find followed by an update is two separate critical sections

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::{debug, warn};

use recordbase_core::{
    DocumentSource, Error, Patch, Predicate, Record, Result, INTERNAL_ID_FIELD,
};

/// Records of one record type, ordered by internal id
pub type Collection = BTreeMap<i64, Record>;

/// In-memory document store
///
/// Shared through `Arc`; all methods take `&self`.
///
/// # Example
///
/// ```
/// use recordbase_core::{DocumentSource, Predicate, Record};
/// use recordbase_storage::CollectionStore;
///
/// let store = CollectionStore::new();
/// store.insert("case", Record::new(5).with("status", "open")).unwrap();
///
/// let found = store.find("case", &Predicate::internal_id(5));
/// assert_eq!(found.len(), 1);
/// assert!(store.find("case", &Predicate::internal_id(6)).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CollectionStore {
    collections: RwLock<BTreeMap<String, Collection>>,
}

impl CollectionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in `collection` (0 if it does not exist)
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    /// Whether the store holds no records at all
    pub fn is_empty(&self) -> bool {
        self.collections.read().values().all(BTreeMap::is_empty)
    }

    /// Owned copy of one collection, ordered by internal id
    pub fn snapshot(&self, collection: &str) -> Vec<Record> {
        self.collections
            .read()
            .get(collection)
            .map(|c| c.values().cloned().collect())
            .unwrap_or_default()
    }

    fn matching<'a>(
        collection: &'a Collection,
        predicate: &'a Predicate,
    ) -> Box<dyn Iterator<Item = &'a Record> + 'a> {
        match predicate.keyed_id() {
            Some(id) => Box::new(
                collection
                    .get(&id)
                    .into_iter()
                    .filter(move |r| predicate.matches(r)),
            ),
            None => Box::new(collection.values().filter(move |r| predicate.matches(r))),
        }
    }
}

impl DocumentSource for CollectionStore {
    fn find(&self, collection: &str, predicate: &Predicate) -> Vec<Record> {
        let collections = self.collections.read();
        match collections.get(collection) {
            Some(records) => Self::matching(records, predicate).cloned().collect(),
            None => Vec::new(),
        }
    }

    fn update(&self, collection: &str, predicate: &Predicate, patch: &Patch) -> usize {
        if patch.contains_key(INTERNAL_ID_FIELD) {
            warn!(
                target: "recordbase::storage",
                collection,
                "Ignoring internalid in update patch"
            );
        }

        let mut collections = self.collections.write();
        let Some(records) = collections.get_mut(collection) else {
            return 0;
        };

        let ids: Vec<i64> = Self::matching(records, predicate).map(Record::id).collect();
        for id in &ids {
            if let Some(record) = records.get_mut(id) {
                for (field, value) in patch {
                    record.set(field.as_str(), value.clone());
                }
            }
        }

        debug!(
            target: "recordbase::storage",
            collection,
            matched = ids.len(),
            fields = patch.len(),
            "Records updated"
        );
        ids.len()
    }

    fn insert(&self, collection: &str, record: Record) -> Result<()> {
        let mut collections = self.collections.write();
        let records = collections.entry(collection.to_string()).or_default();

        let id = record.id();
        if records.contains_key(&id) {
            return Err(Error::DuplicateInternalId {
                record_type: collection.to_string(),
                id,
            });
        }
        records.insert(id, record);

        debug!(target: "recordbase::storage", collection, id, "Record inserted");
        Ok(())
    }

    fn collections(&self) -> Vec<String> {
        self.collections.read().keys().cloned().collect()
    }
}
