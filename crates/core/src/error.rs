//! Error types for recordbase
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The field API reports failures through a closed set of kinds
//! ([`ErrorKind`]). Each kind maps to one [`Error`] variant carrying the
//! offending argument, record type and id. Infrastructure failures
//! (fixture loading, configuration, I/O) live beside them but have no kind.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for recordbase operations
pub type Result<T> = std::result::Result<T, Error>;

/// The closed taxonomy of field API failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Record type omitted
    TypeArgumentRequired,
    /// Internal id omitted
    IdArgumentRequired,
    /// Internal id is not an integer, or no record exists for it
    InvalidInternalId,
    /// Fields argument missing or empty
    FieldsArgumentRequired,
    /// Values argument missing, empty or misaligned with fields
    ValuesArgumentRequired,
    /// No metadata descriptor for the record type
    InvalidRecordType,
}

impl ErrorKind {
    /// Platform error code reported for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::TypeArgumentRequired => "SSS_TYPE_ARG_REQD",
            ErrorKind::IdArgumentRequired => "SSS_ID_ARG_REQD",
            ErrorKind::InvalidInternalId => "SSS_INVALID_INTERNAL_ID",
            ErrorKind::FieldsArgumentRequired => "SSS_FIELDS_ARG_REQD",
            ErrorKind::ValuesArgumentRequired => "SSS_VALUES_ARG_REQD",
            ErrorKind::InvalidRecordType => "SSS_INVALID_RECORD_TYPE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error types for recordbase
#[derive(Debug, Error)]
pub enum Error {
    /// Record type argument was empty
    #[error("record type argument is required")]
    TypeArgumentRequired,

    /// Internal id argument was missing or falsy
    #[error("internal id argument is required for record type '{record_type}'")]
    IdArgumentRequired {
        /// Record type of the call
        record_type: String,
    },

    /// Internal id was not an integer, or matched no record
    #[error("invalid internal id {id} for record type '{record_type}'")]
    InvalidInternalId {
        /// Record type of the call
        record_type: String,
        /// Rendered form of the offending id
        id: String,
    },

    /// Fields argument was empty
    #[error("fields argument is required for {record_type} {id}")]
    FieldsArgumentRequired {
        /// Record type of the call
        record_type: String,
        /// Internal id of the call
        id: i64,
    },

    /// Values argument was empty, falsy or misaligned with fields
    #[error("values argument is required for {record_type} {id}: {reason}")]
    ValuesArgumentRequired {
        /// Record type of the call
        record_type: String,
        /// Internal id of the call
        id: i64,
        /// What was wrong with the values argument
        reason: String,
    },

    /// No metadata descriptor exists for the record type
    #[error("invalid record type '{record_type}'")]
    InvalidRecordType {
        /// The unknown record type
        record_type: String,
    },

    /// A record with this internal id already exists in the collection
    #[error("duplicate internal id {id} in collection '{record_type}'")]
    DuplicateInternalId {
        /// Collection the insert targeted
        record_type: String,
        /// The conflicting id
        id: i64,
    },

    /// A descriptor with this code is already registered
    #[error("record type '{0}' is already registered")]
    DuplicateRecordType(String),

    /// A stored or seeded document does not have the expected shape
    #[error("invalid document in '{collection}': {reason}")]
    InvalidDocument {
        /// Collection holding the document
        collection: String,
        /// What is wrong with it
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Field API kind of this error, `None` for infrastructure failures
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::TypeArgumentRequired => Some(ErrorKind::TypeArgumentRequired),
            Error::IdArgumentRequired { .. } => Some(ErrorKind::IdArgumentRequired),
            Error::InvalidInternalId { .. } => Some(ErrorKind::InvalidInternalId),
            Error::FieldsArgumentRequired { .. } => Some(ErrorKind::FieldsArgumentRequired),
            Error::ValuesArgumentRequired { .. } => Some(ErrorKind::ValuesArgumentRequired),
            Error::InvalidRecordType { .. } => Some(ErrorKind::InvalidRecordType),
            Error::DuplicateInternalId { .. }
            | Error::DuplicateRecordType(_)
            | Error::InvalidDocument { .. }
            | Error::Serialization(_)
            | Error::Config(_)
            | Error::Io(_) => None,
        }
    }

    /// Shorthand for an `InvalidInternalId` error
    pub fn invalid_internal_id(record_type: &str, id: impl fmt::Display) -> Self {
        Error::InvalidInternalId {
            record_type: record_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Shorthand for an `InvalidRecordType` error
    pub fn invalid_record_type(record_type: &str) -> Self {
        Error::InvalidRecordType {
            record_type: record_type.to_string(),
        }
    }

    /// Shorthand for an `InvalidDocument` error
    pub fn invalid_document(collection: &str, reason: impl Into<String>) -> Self {
        Error::InvalidDocument {
            collection: collection.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
