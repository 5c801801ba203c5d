//! Storage layer for recordbase
//!
//! This crate implements the in-memory document backend:
//! - CollectionStore: per-record-type collections behind a `parking_lot::RwLock`
//! - Keyed `internalid` lookups, predicate scans for everything else
//! - Partial in-place updates that never rewrite a record's key

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;

pub use collection::{Collection, CollectionStore};
