//! Database configuration via `recordbase.toml`
//!
//! On first open, a default `recordbase.toml` is created in the data
//! directory. To change settings, edit the file and reopen.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use recordbase_core::{Error, Result, DEFAULT_METADATA_COLLECTION};

/// Config file name placed in the database data directory.
pub const CONFIG_FILE_NAME: &str = "recordbase.toml";

/// Database configuration loaded from `recordbase.toml`.
///
/// # Example
///
/// ```toml
/// # Reserved collection holding one descriptor per record type
/// metadata_collection = "__metadata"
///
/// # JSON fixture loaded into the store on open
/// # seed = "seed.json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordbaseConfig {
    /// Name of the reserved metadata collection.
    #[serde(default = "default_metadata_collection")]
    pub metadata_collection: String,
    /// JSON fixture to seed the store with, relative to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

fn default_metadata_collection() -> String {
    DEFAULT_METADATA_COLLECTION.to_string()
}

impl Default for RecordbaseConfig {
    fn default() -> Self {
        Self {
            metadata_collection: default_metadata_collection(),
            seed: None,
        }
    }
}

impl RecordbaseConfig {
    /// Check the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `metadata_collection` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.metadata_collection.trim().is_empty() {
            return Err(Error::Config(
                "metadata_collection must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Seed fixture path resolved against `data_dir`.
    pub fn seed_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.seed.as_ref().map(|seed| data_dir.join(seed))
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Recordbase configuration
#
# Reserved collection holding one descriptor per record type.
metadata_collection = "__metadata"

# JSON fixture loaded into the store when the database is opened.
# Path is relative to the data directory.
# seed = "seed.json"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: RecordbaseConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
