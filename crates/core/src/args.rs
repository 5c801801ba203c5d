//! Argument shapes accepted by the field API
//!
//! A field API call names either one field or a list of fields, and for
//! submissions either one value or a list of values. The shape is fixed
//! by the variant, so "neither a string nor a list" cannot be expressed.

use crate::value::Value;

/// One field name or a list of field names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// A single field; lookups return its text form
    Single(String),
    /// A list of fields; lookups return a name to value mapping
    List(Vec<String>),
}

impl FieldSpec {
    /// True when no usable field name was given
    pub fn is_empty(&self) -> bool {
        match self {
            FieldSpec::Single(name) => name.is_empty(),
            FieldSpec::List(names) => names.is_empty(),
        }
    }

    /// Number of field names
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Field names as a slice
    pub fn names(&self) -> &[String] {
        match self {
            FieldSpec::Single(name) => std::slice::from_ref(name),
            FieldSpec::List(names) => names,
        }
    }

    /// Whether this is the single-field form
    pub fn is_single(&self) -> bool {
        matches!(self, FieldSpec::Single(_))
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        FieldSpec::Single(name.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        FieldSpec::Single(name)
    }
}

impl From<Vec<String>> for FieldSpec {
    fn from(names: Vec<String>) -> Self {
        FieldSpec::List(names)
    }
}

impl From<Vec<&str>> for FieldSpec {
    fn from(names: Vec<&str>) -> Self {
        FieldSpec::List(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldSpec {
    fn from(names: &[&str]) -> Self {
        FieldSpec::List(names.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for FieldSpec {
    fn from(names: &[String]) -> Self {
        FieldSpec::List(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for FieldSpec {
    fn from(names: [&str; N]) -> Self {
        FieldSpec::List(names.iter().map(|s| s.to_string()).collect())
    }
}

/// One value or a list of values, aligned with a [`FieldSpec`]
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSpec {
    /// A single value
    Single(Value),
    /// A list of values
    List(Vec<Value>),
}

impl ValueSpec {
    /// True when the argument counts as not supplied
    ///
    /// A single value is missing when it is falsy; a list when it is empty.
    pub fn is_missing(&self) -> bool {
        match self {
            ValueSpec::Single(value) => !value.is_truthy(),
            ValueSpec::List(values) => values.is_empty(),
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Always false for a list with entries or a single value
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Values as a slice
    pub fn values(&self) -> &[Value] {
        match self {
            ValueSpec::Single(value) => std::slice::from_ref(value),
            ValueSpec::List(values) => values,
        }
    }
}

impl From<Value> for ValueSpec {
    fn from(value: Value) -> Self {
        ValueSpec::Single(value)
    }
}

impl From<&str> for ValueSpec {
    fn from(value: &str) -> Self {
        ValueSpec::Single(Value::from(value))
    }
}

impl From<String> for ValueSpec {
    fn from(value: String) -> Self {
        ValueSpec::Single(Value::String(value))
    }
}

impl From<i64> for ValueSpec {
    fn from(value: i64) -> Self {
        ValueSpec::Single(Value::Int(value))
    }
}

impl From<bool> for ValueSpec {
    fn from(value: bool) -> Self {
        ValueSpec::Single(Value::Bool(value))
    }
}

impl From<Vec<Value>> for ValueSpec {
    fn from(values: Vec<Value>) -> Self {
        ValueSpec::List(values)
    }
}

impl From<Vec<&str>> for ValueSpec {
    fn from(values: Vec<&str>) -> Self {
        ValueSpec::List(values.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for ValueSpec {
    fn from(values: Vec<String>) -> Self {
        ValueSpec::List(values.into_iter().map(Value::String).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ValueSpec {
    fn from(values: [&str; N]) -> Self {
        ValueSpec::List(values.iter().map(|s| Value::from(*s)).collect())
    }
}

impl<const N: usize> From<[Value; N]> for ValueSpec {
    fn from(values: [Value; N]) -> Self {
        ValueSpec::List(values.into_iter().collect())
    }
}
