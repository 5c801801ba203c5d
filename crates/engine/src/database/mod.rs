//! Database struct and open logic
//!
//! This module provides the Database struct that ties together:
//! - The document source (a `CollectionStore` unless another is supplied)
//! - The metadata registry over the reserved collection
//! - Configuration from `recordbase.toml`
//! - Seeding from a JSON fixture
//!
//! Every Database is an independent instance; there is no process-wide
//! store. Tests build one per case with [`Database::ephemeral`].

pub mod config;
pub mod fixture;

pub use config::{RecordbaseConfig, CONFIG_FILE_NAME};
pub use fixture::{Document, Fixture};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use recordbase_core::{
    DocumentSource, Error, Predicate, Record, RecordTypeDescriptor, Result, Value,
};
use recordbase_storage::CollectionStore;
use tracing::{info, warn};

use crate::metadata::MetadataRegistry;

/// Main database struct
///
/// Holds the document source, the metadata registry and the configuration.
/// Create one with [`Database::open`], [`Database::open_with_config`] or
/// [`Database::ephemeral`].
///
/// # Example
///
/// ```
/// use recordbase_core::{Record, RecordTypeDescriptor};
/// use recordbase_engine::Database;
///
/// let db = Database::ephemeral();
/// db.register_type(&RecordTypeDescriptor::new("customer").with_field("name"))
///     .unwrap();
/// db.insert_record("customer", Record::new(7).with("name", "Acme"))
///     .unwrap();
/// ```
pub struct Database {
    /// Data directory path (None for ephemeral databases)
    data_dir: Option<PathBuf>,
    /// Document collections
    source: Arc<dyn DocumentSource>,
    /// Record type descriptors over the reserved collection
    metadata: MetadataRegistry,
    /// Settings this database was opened with
    config: RecordbaseConfig,
}

impl Database {
    /// Open a database rooted at `path`.
    ///
    /// Creates the directory and a default `recordbase.toml` if needed,
    /// then loads the configured seed fixture, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config cannot be created or
    /// read, or if the seed fixture fails to load.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        RecordbaseConfig::write_default_if_missing(&config_path)?;
        let cfg = RecordbaseConfig::from_file(&config_path)?;

        Self::open_at(data_dir, cfg)
    }

    /// Open a database at `path` with an explicit configuration.
    ///
    /// The supplied config is written to `recordbase.toml` so that later
    /// [`Database::open`] calls pick up the same settings.
    pub fn open_with_config<P: AsRef<Path>>(path: P, cfg: RecordbaseConfig) -> Result<Arc<Self>> {
        cfg.validate()?;
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;
        cfg.write_to_file(&data_dir.join(CONFIG_FILE_NAME))?;

        Self::open_at(data_dir, cfg)
    }

    fn open_at(data_dir: PathBuf, cfg: RecordbaseConfig) -> Result<Arc<Self>> {
        let seed = cfg.seed_path(&data_dir);
        let db = Self::build(
            Some(data_dir),
            Arc::new(CollectionStore::new()),
            cfg,
        );

        if let Some(seed) = seed {
            let fixture = Fixture::from_file(&seed)?;
            db.seed(&fixture)?;
        }

        info!(
            target: "recordbase::db",
            path = ?db.data_dir,
            metadata_collection = %db.config.metadata_collection,
            "Database opened"
        );
        Ok(Arc::new(db))
    }

    /// In-memory database with the default configuration.
    ///
    /// No files are created.
    pub fn ephemeral() -> Arc<Self> {
        Arc::new(Self::build(
            None,
            Arc::new(CollectionStore::new()),
            RecordbaseConfig::default(),
        ))
    }

    /// In-memory database seeded from `fixture`.
    pub fn from_fixture(fixture: &Fixture) -> Result<Arc<Self>> {
        let db = Self::ephemeral();
        db.seed(fixture)?;
        Ok(db)
    }

    /// Database over a caller-supplied document source.
    pub fn with_source(source: Arc<dyn DocumentSource>, cfg: RecordbaseConfig) -> Result<Arc<Self>> {
        cfg.validate()?;
        Ok(Arc::new(Self::build(None, source, cfg)))
    }

    fn build(
        data_dir: Option<PathBuf>,
        source: Arc<dyn DocumentSource>,
        config: RecordbaseConfig,
    ) -> Self {
        let metadata = MetadataRegistry::new(source.clone(), config.metadata_collection.clone());
        Self {
            data_dir,
            source,
            metadata,
            config,
        }
    }

    /// Data directory, `None` for in-memory databases
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Document source backing every collection
    pub fn source(&self) -> &Arc<dyn DocumentSource> {
        &self.source
    }

    /// Metadata registry
    pub fn metadata(&self) -> &MetadataRegistry {
        &self.metadata
    }

    /// Configuration this database was opened with
    pub fn config(&self) -> &RecordbaseConfig {
        &self.config
    }

    // ========================================================================
    // Initialization
    // ========================================================================

    /// Register a record type descriptor.
    pub fn register_type(&self, descriptor: &RecordTypeDescriptor) -> Result<()> {
        self.metadata.register(descriptor).map(|_| ())
    }

    /// Insert a record into a registered type's collection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecordType` if the type has no descriptor and
    /// `DuplicateInternalId` if the id is taken.
    pub fn insert_record(&self, record_type: &str, record: Record) -> Result<()> {
        if !self.metadata.contains(record_type) {
            return Err(Error::invalid_record_type(record_type));
        }
        self.source.insert(record_type, record)
    }

    /// Load a fixture: descriptors first, then records.
    ///
    /// Loading stops at the first failure; anything loaded before it stays.
    pub fn seed(&self, fixture: &Fixture) -> Result<()> {
        let metadata_collection = self.metadata.collection();

        for document in fixture.documents(metadata_collection) {
            let descriptor: RecordTypeDescriptor =
                serde_json::from_value(serde_json::Value::Object(document.clone()))
                    .map_err(|e| Error::invalid_document(metadata_collection, e.to_string()))?;
            self.register_type(&descriptor)?;
        }

        let mut records = 0usize;
        for (collection, documents) in fixture.collections() {
            if collection == metadata_collection {
                continue;
            }
            for document in documents {
                let object = document
                    .iter()
                    .map(|(field, value)| (field.clone(), Value::from(value.clone())))
                    .collect();
                self.insert_record(collection, Record::from_object(collection, object)?)?;
                records += 1;
            }
        }

        info!(
            target: "recordbase::db",
            types = fixture.documents(metadata_collection).len(),
            records,
            "Fixture loaded"
        );
        Ok(())
    }

    /// Export descriptors and records as a fixture.
    pub fn capture(&self) -> Result<Fixture> {
        let mut fixture = Fixture::new();
        let metadata_collection = self.metadata.collection();

        for descriptor in self.metadata.descriptors()? {
            if let serde_json::Value::Object(document) = serde_json::to_value(&descriptor)? {
                fixture.push(metadata_collection, document);
            }
        }

        for collection in self.source.collections() {
            if collection == metadata_collection {
                continue;
            }
            if !self.metadata.contains(&collection) {
                warn!(
                    target: "recordbase::db",
                    collection = %collection,
                    "Capturing collection without a descriptor"
                );
            }
            let mut records = self.source.find(&collection, &Predicate::All);
            records.sort_by_key(Record::id);
            for record in records {
                if let serde_json::Value::Object(document) =
                    serde_json::Value::from(record.into_value())
                {
                    fixture.push(collection.as_str(), document);
                }
            }
        }

        Ok(fixture)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("data_dir", &self.data_dir)
            .field("metadata", &self.metadata)
            .field("config", &self.config)
            .finish()
    }
}
