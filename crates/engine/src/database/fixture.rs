//! JSON fixtures for store initialization
//!
//! A fixture is one JSON object keyed by collection name, each entry an
//! array of documents. The reserved metadata collection sits alongside the
//! record collections:
//!
//! ```json
//! {
//!   "__metadata": [
//!     { "code": "case", "fields": [{ "code": "customer", "recordType": "customer" }] },
//!     { "code": "customer", "fields": [{ "code": "name" }] }
//!   ],
//!   "case": [{ "internalid": 5, "status": "open", "customer": 7 }],
//!   "customer": [{ "internalid": 7, "name": "Acme" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use recordbase_core::{Error, Result};

/// One JSON document
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Collections of JSON documents keyed by collection name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixture {
    collections: BTreeMap<String, Vec<Document>>,
}

impl Fixture {
    /// Empty fixture
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fixture from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the text is not an object of document arrays.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read seed file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append a document to `collection`
    pub fn push(&mut self, collection: impl Into<String>, document: Document) {
        self.collections
            .entry(collection.into())
            .or_default()
            .push(document);
    }

    /// Builder-style [`Fixture::push`] taking any JSON object value
    ///
    /// Non-object values are ignored.
    pub fn with(mut self, collection: impl Into<String>, document: serde_json::Value) -> Self {
        if let serde_json::Value::Object(document) = document {
            self.push(collection, document);
        }
        self
    }

    /// Documents of one collection
    pub fn documents(&self, collection: &str) -> &[Document] {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All collections in name order
    pub fn collections(&self) -> impl Iterator<Item = (&str, &[Document])> {
        self.collections
            .iter()
            .map(|(name, docs)| (name.as_str(), docs.as_slice()))
    }

    /// Whether the fixture has no collections
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
