//! Core types and traits for recordbase
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Unified value enum for record fields
//! - Record: Document keyed by `internalid`
//! - RecordTypeDescriptor / FieldDescriptor: Per-type metadata and join targets
//! - Predicate: Equality filters over records
//! - FieldSpec / ValueSpec: Argument shapes of the field API
//! - Error / ErrorKind: Error type hierarchy
//! - Traits: DocumentSource storage abstraction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod error;
pub mod predicate;
pub mod traits;
pub mod types;
pub mod value;

pub use args::{FieldSpec, ValueSpec};
pub use error::{Error, ErrorKind, Result};
pub use predicate::Predicate;
pub use traits::{DocumentSource, Patch};
pub use types::{
    FieldDescriptor, Record, RecordTypeDescriptor, DEFAULT_METADATA_COLLECTION,
    INTERNAL_ID_FIELD, JOIN_DELIMITER,
};
pub use value::Value;
