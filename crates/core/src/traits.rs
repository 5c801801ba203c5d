//! Core trait for document storage
//!
//! This module defines the DocumentSource trait that lets the field engines
//! run over any collection backend without depending on its internals.

use std::collections::HashMap;

use crate::error::Result;
use crate::predicate::Predicate;
use crate::types::Record;
use crate::value::Value;

/// Field values merged into matching records by [`DocumentSource::update`]
pub type Patch = HashMap<String, Value>;

/// Document storage abstraction
///
/// Collections are addressed by record type code. Reads and updates never
/// fail: an unknown collection behaves like an empty one.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync). Individual calls are atomic,
/// sequences of calls are not.
pub trait DocumentSource: Send + Sync {
    /// Owned copies of every record in `collection` matching `predicate`
    ///
    /// Order is unspecified. Mutating the returned records never affects
    /// stored state.
    fn find(&self, collection: &str, predicate: &Predicate) -> Vec<Record>;

    /// Merge `patch` into every record matching `predicate`
    ///
    /// Returns the number of records touched. A patch entry for
    /// `internalid` is ignored.
    fn update(&self, collection: &str, predicate: &Predicate, patch: &Patch) -> usize;

    /// Add a record to `collection`, creating the collection if needed
    ///
    /// # Errors
    ///
    /// Returns `DuplicateInternalId` if the id is already taken.
    fn insert(&self, collection: &str, record: Record) -> Result<()>;

    /// Names of all collections, sorted
    fn collections(&self) -> Vec<String>;
}
