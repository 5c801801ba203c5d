//! Record and metadata types
//!
//! - Record: one document in a record type's collection, keyed by `internalid`
//! - FieldDescriptor / RecordTypeDescriptor: per-type metadata, including join targets

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name carrying a record's internal identifier
pub const INTERNAL_ID_FIELD: &str = "internalid";

/// Default name of the reserved collection holding record type descriptors
pub const DEFAULT_METADATA_COLLECTION: &str = "__metadata";

/// Separator between the source field and the target field of a join path
pub const JOIN_DELIMITER: char = '.';

// ============================================================================
// Metadata
// ============================================================================

/// Metadata entry for one field of a record type
///
/// `record_type` is set only for foreign-key fields whose value is the
/// internal id of a record in another type's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field code
    pub code: String,
    /// Record type this field joins to
    #[serde(
        rename = "recordType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub record_type: Option<String>,
}

impl FieldDescriptor {
    /// Plain (non-join) field
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            record_type: None,
        }
    }

    /// Join field pointing at `record_type`
    pub fn join(code: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            record_type: Some(record_type.into()),
        }
    }
}

/// Metadata descriptor for one record type
///
/// # Example
///
/// ```
/// use recordbase_core::RecordTypeDescriptor;
///
/// let case = RecordTypeDescriptor::new("case")
///     .with_field("status")
///     .with_join("customer", "customer");
/// assert_eq!(case.join_target("customer"), Some("customer"));
/// assert_eq!(case.join_target("status"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTypeDescriptor {
    /// Type code, unique across the registry
    pub code: String,
    /// Field descriptors in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl RecordTypeDescriptor {
    /// Descriptor with no fields
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            fields: Vec::new(),
        }
    }

    /// Append a plain field
    pub fn with_field(mut self, code: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::new(code));
        self
    }

    /// Append a join field
    pub fn with_join(mut self, code: impl Into<String>, record_type: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::join(code, record_type));
        self
    }

    /// First field descriptor with the given code
    pub fn field(&self, code: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.code == code)
    }

    /// Target record type of a join field, if `code` is one
    pub fn join_target(&self, code: &str) -> Option<&str> {
        self.field(code).and_then(|f| f.record_type.as_deref())
    }
}

// ============================================================================
// Record
// ============================================================================

/// A document in a record type's collection
///
/// The internal id is also visible as the `internalid` field and can
/// never be changed through [`Record::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: i64,
    fields: HashMap<String, Value>,
}

impl Record {
    /// Empty record with the given internal id
    pub fn new(id: i64) -> Self {
        let mut fields = HashMap::new();
        fields.insert(INTERNAL_ID_FIELD.to_string(), Value::Int(id));
        Self { id, fields }
    }

    /// Builder-style field assignment
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Build a record from a JSON-style object
    ///
    /// The object must carry an integer `internalid`.
    pub fn from_object(collection: &str, mut object: HashMap<String, Value>) -> Result<Self> {
        let id = match object.get(INTERNAL_ID_FIELD) {
            Some(Value::Int(id)) => *id,
            Some(other) => {
                return Err(Error::invalid_document(
                    collection,
                    format!("internalid must be an integer, got {}", other.type_name()),
                ))
            }
            None => return Err(Error::invalid_document(collection, "missing internalid")),
        };
        object.insert(INTERNAL_ID_FIELD.to_string(), Value::Int(id));
        Ok(Self { id, fields: object })
    }

    /// Internal id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Value of a field, `internalid` included
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field, returning `false` if the field is the internal id
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> bool {
        let field = field.into();
        if field == INTERNAL_ID_FIELD {
            return false;
        }
        self.fields.insert(field, value.into());
        true
    }

    /// Iterate over all fields, `internalid` included
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Number of fields, `internalid` included
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: a record carries at least its internal id
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert into a JSON-style object value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
