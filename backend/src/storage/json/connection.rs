use anyhow::Result;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the storage root and the JSON record files
/// inside it. Each persisted record is one pretty-printed JSON file
/// keyed by file name, written atomically via a temp file rename.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {:?}", base_path);
        }

        Ok(Self { base_directory: base_path })
    }

    /// Create a new connection in the default data directory
    /// (~/Documents/Milestone Tracker)
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Milestone Tracker");

        Self::new(data_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path backing a record key
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(key)
    }

    /// Read and deserialize a record. Returns None when the file does
    /// not exist yet; propagates read and parse failures to the caller
    /// so repositories can apply their fallback policy.
    pub fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.record_path(key);

        if !path.exists() {
            debug!("Record {} not present, treating as first run", key);
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        debug!("Loaded record {} from {:?}", key, path);
        Ok(Some(value))
    }

    /// Serialize and write a record, replacing any previous value.
    /// Uses the atomic write pattern: write to a temp file, then rename.
    pub fn write_record<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
            info!("Created data directory: {:?}", self.base_directory);
        }

        let path = self.record_path(key);
        let content = serde_json::to_string_pretty(value)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved record {} to {:?}", key, path);
        Ok(())
    }
}
