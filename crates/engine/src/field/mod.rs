//! FieldApi: field-level lookup and submission over records
//!
//! ## Design: STATELESS FACADE
//!
//! FieldApi holds ONLY `Arc<Database>`. Every call reads the metadata
//! registry and the collections afresh; nothing survives between calls
//! except the join cache inside a single lookup.
//!
//! ## API
//!
//! - `lookup_field`: one field as text, or several fields (with
//!   `source.target` joins) as a name to value mapping
//! - `submit_field`: set one or more fields on a record
//!
//! Both validate their arguments in a fixed order and stop at the first
//! failure, before touching the store.

mod lookup;
mod submit;
mod validate;

use std::sync::Arc;

use recordbase_core::{Error, Predicate, Record, RecordTypeDescriptor, Result, Value};

use crate::database::Database;

/// Field lookup and submission facade
///
/// # Example
///
/// ```
/// use recordbase_core::{Record, RecordTypeDescriptor, Value};
/// use recordbase_engine::{Database, FieldApi};
///
/// let db = Database::ephemeral();
/// db.register_type(&RecordTypeDescriptor::new("customer").with_field("name")).unwrap();
/// db.register_type(
///     &RecordTypeDescriptor::new("case")
///         .with_field("status")
///         .with_join("customer", "customer"),
/// )
/// .unwrap();
/// db.insert_record("customer", Record::new(7).with("name", "Acme")).unwrap();
/// db.insert_record("case", Record::new(5).with("status", "open").with("customer", 7i64))
///     .unwrap();
///
/// let api = FieldApi::new(db);
/// assert_eq!(api.lookup_text("case", 5, "status").unwrap(), "open");
///
/// let values = api.lookup_values("case", 5, ["status", "customer.name"]).unwrap();
/// assert_eq!(values.get("customer.name"), Some(&Value::from("Acme")));
///
/// api.submit_field("case", 5, "status", "closed", false).unwrap();
/// assert_eq!(api.lookup_text("case", 5, "status").unwrap(), "closed");
/// ```
#[derive(Clone)]
pub struct FieldApi {
    db: Arc<Database>,
}

impl FieldApi {
    /// Create new FieldApi instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database reference
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Descriptor of `record_type` and the record with internal id `id`
    ///
    /// Covers the last two validation steps shared by lookup and submit.
    fn load(&self, record_type: &str, id: i64) -> Result<(RecordTypeDescriptor, Record)> {
        let descriptor = self.db.metadata().describe(record_type)?;
        let record = self
            .db
            .source()
            .find(record_type, &Predicate::internal_id(id))
            .into_iter()
            .next()
            .ok_or_else(|| Error::invalid_internal_id(record_type, id))?;
        Ok((descriptor, record))
    }
}

/// Result of [`FieldApi::lookup_field`]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldLookup {
    /// Single-field form: text of the stored value
    Text(String),
    /// List form: value per requested name
    Values(FieldValues),
}

impl FieldLookup {
    /// The text, if this is the single-field form
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldLookup::Text(text) => Some(text),
            FieldLookup::Values(_) => None,
        }
    }

    /// The mapping, if this is the list form
    pub fn into_values(self) -> Option<FieldValues> {
        match self {
            FieldLookup::Text(_) => None,
            FieldLookup::Values(values) => Some(values),
        }
    }
}

/// Requested field names mapped to their resolved values
///
/// Keeps the order of the request; a name requested twice appears once.
/// Unresolved names (missing field, missing join target) map to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    entries: Vec<(String, Option<Value>)>,
}

impl FieldValues {
    pub(crate) fn insert(&mut self, name: &str, value: Option<Value>) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Resolved value for `name`
    ///
    /// `None` both when the name was not requested and when it did not
    /// resolve; use [`FieldValues::contains_key`] to tell them apart.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether `name` was requested
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Requested names in request order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Names and resolved values in request order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }

    /// Number of distinct requested names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names were requested
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for FieldValues {
    type Item = (String, Option<Value>);
    type IntoIter = std::vec::IntoIter<(String, Option<Value>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
