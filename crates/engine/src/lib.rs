//! Field engine for recordbase
//!
//! This crate ties the document store to the metadata registry:
//! - Database: store, registry and configuration, opened from a directory
//!   or built in memory
//! - Metadata: record type descriptors kept in a reserved collection
//! - Fixtures: JSON documents used to seed and capture a database
//! - FieldApi: field lookup (with joins) and field submission
//!
//! The engine is the only component that knows about:
//! - Argument validation order and the error taxonomy of the field API
//! - Join resolution through descriptors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod field;
pub mod metadata;

pub use database::{Database, Document, Fixture, RecordbaseConfig, CONFIG_FILE_NAME};
pub use field::{FieldApi, FieldLookup, FieldValues};
pub use metadata::MetadataRegistry;
