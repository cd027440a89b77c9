//! Entry storage.
//!
//! Entries are persisted through a byte-level [`Bucket`] with three
//! implementations selected from [`StorageConfig`]:
//!
//! - [`Filesystem`]: local directory (always available)
//! - `S3Bucket`: Amazon S3 (feature `aws`)
//! - `GcsBucket`: Google Cloud Storage via the gcloud CLI (feature `gcp`)
//!
//! [`Storage`] layers entry semantics on top: key generation, encryption,
//! and the `createdAt` metadata that carries an entry's creation time
//! independently of the backend's modification time.
//!
//! Each [`Storage`] operation opens a bucket handle, uses it, and drops it
//! before returning. Handles are never held across calls.
//!
//! ## Deleting missing keys
//!
//! The backends disagree and this is not papered over: the filesystem and
//! GCS report `StoreError::NotFound`, while S3 deletes are idempotent and
//! succeed. Callers that need "not found" semantics check with
//! [`EntryStore::read_by_key`] first.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::cipher;
use crate::core::config::{Config, StorageConfig};
use crate::core::constants::{CREATED_AT, MAX_ENTRY_CHARS};
use crate::core::entry::{self, Entry};
use crate::error::{Result, StoreError};

mod fs;

#[cfg(feature = "aws")]
pub mod s3;

#[cfg(feature = "gcp")]
pub mod gcs;

pub use fs::Filesystem;

/// Object metadata: string key/value pairs stored next to the bytes.
pub type Metadata = BTreeMap<String, String>;

/// Byte-oriented object store.
///
/// Implementations must treat keys as opaque and must return
/// `StoreError::NotFound` from `get` and `metadata` for missing keys.
pub trait Bucket {
    /// Write `data` under `key` with `metadata`, replacing any existing object.
    fn put(&self, key: &str, data: &[u8], metadata: &Metadata) -> Result<()>;

    /// Read the bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// List all keys.
    fn list(&self) -> Result<Vec<String>>;

    /// Remove the object under `key`.
    fn delete(&self, key: &str) -> Result<()>;

    /// Read the metadata stored under `key`.
    fn metadata(&self, key: &str) -> Result<Metadata>;
}

/// CRUD over journal entries.
pub trait EntryStore {
    /// Encrypt `plaintext` and store it as a new entry.
    fn create(&self, plaintext: &str) -> Result<Entry>;

    /// Read all entries, unsorted.
    fn read(&self) -> Result<Vec<Entry>>;

    /// Read one entry by key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has this key.
    fn read_by_key(&self, key: &str) -> Result<Entry>;

    /// Overwrite an entry's content, keeping its key and creation time.
    fn update(&self, entry: &Entry) -> Result<()>;

    /// Delete an entry by key.
    fn delete(&self, key: &str) -> Result<()>;
}

/// Entry store backed by the configured bucket.
#[derive(Debug, Clone)]
pub struct Storage {
    config: StorageConfig,
}

impl Storage {
    /// Create a store for the given storage configuration.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Create a store from resolved runtime configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.storage.clone())
    }

    /// Open a bucket handle for one operation.
    fn open(&self) -> Result<Box<dyn Bucket>> {
        debug!(backend = %self.config.kind(), "opening bucket");
        match &self.config {
            StorageConfig::Local { dir } => Ok(Box::new(Filesystem::open(dir)?)),

            #[cfg(feature = "aws")]
            StorageConfig::S3 { bucket, region } => Ok(Box::new(s3::S3Bucket::open(bucket, region)?)),

            #[cfg(not(feature = "aws"))]
            StorageConfig::S3 { .. } => Err(StoreError::BackendUnavailable {
                backend: "S3",
                feature: "aws",
            }
            .into()),

            #[cfg(feature = "gcp")]
            StorageConfig::Gcs { bucket, project } => {
                Ok(Box::new(gcs::GcsBucket::open(bucket, project)?))
            }

            #[cfg(not(feature = "gcp"))]
            StorageConfig::Gcs { .. } => Err(StoreError::BackendUnavailable {
                backend: "GCS",
                feature: "gcp",
            }
            .into()),
        }
    }

    /// Fetch one entry and its creation time from an open bucket.
    fn fetch(bucket: &dyn Bucket, key: &str) -> Result<Entry> {
        let bytes = bucket.get(key)?;
        let metadata = bucket.metadata(key)?;
        let created_at = created_at_from(key, &metadata)?;

        // Invalid UTF-8 is left for the cipher to reject.
        let content = String::from_utf8_lossy(&bytes).trim_end().to_string();
        Ok(Entry::new(key, created_at, content))
    }

    /// Fetch every entry in an open bucket.
    ///
    /// Objects whose names are not entry keys (folder placeholders, stray
    /// files) are skipped so every backend presents the same view.
    fn fetch_all(bucket: &dyn Bucket) -> Result<Vec<Entry>> {
        let keys = bucket.list()?;
        let (entries, strays): (Vec<String>, Vec<String>) =
            keys.into_iter().partition(|key| entry::is_valid_key(key));
        if !strays.is_empty() {
            debug!(count = strays.len(), "skipping non-entry objects");
        }
        debug!(count = entries.len(), "listing entries");

        entries
            .iter()
            .map(|key| Self::fetch(bucket, key))
            .collect()
    }

    fn write(bucket: &dyn Bucket, key: &str, content: &str, created_at: &DateTime<Utc>) -> Result<()> {
        let mut metadata = Metadata::new();
        metadata.insert(CREATED_AT.to_string(), entry::format_created_at(created_at));
        bucket.put(key, format!("{}\n", content).as_bytes(), &metadata)
    }
}

impl EntryStore for Storage {
    fn create(&self, plaintext: &str) -> Result<Entry> {
        validate_plaintext(plaintext)?;

        // Encrypt before touching the backend so a missing passphrase
        // performs no I/O.
        let content = cipher::encrypt(plaintext)?;

        let created_at = Utc::now();
        let key = entry::generate_key(created_at);

        let bucket = self.open()?;
        Self::write(bucket.as_ref(), &key, &content, &created_at)?;
        debug!(key = %key, "entry created");

        Ok(Entry::new(key, created_at, content))
    }

    fn read(&self) -> Result<Vec<Entry>> {
        let bucket = self.open()?;
        Self::fetch_all(bucket.as_ref())
    }

    fn read_by_key(&self, key: &str) -> Result<Entry> {
        validate_key(key)?;
        let bucket = self.open()?;
        Self::fetch(bucket.as_ref(), key)
    }

    fn update(&self, entry: &Entry) -> Result<()> {
        validate_key(&entry.key)?;
        let bucket = self.open()?;
        Self::write(bucket.as_ref(), &entry.key, &entry.content, &entry.created_at)?;
        debug!(key = %entry.key, "entry updated");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let bucket = self.open()?;
        bucket.delete(key)?;
        debug!(key = %key, "entry deleted");
        Ok(())
    }
}

/// Reject keys that `generate_key` could not have produced.
fn validate_key(key: &str) -> Result<()> {
    if !entry::is_valid_key(key) {
        warn!("rejected malformed entry key");
        return Err(StoreError::InvalidKey(key.to_string()).into());
    }
    Ok(())
}

/// Enforce the entry size limit and reject blank entries.
fn validate_plaintext(plaintext: &str) -> Result<()> {
    if plaintext.trim().is_empty() {
        return Err(StoreError::InvalidEntry("Entry cannot be empty.".to_string()).into());
    }
    if plaintext.chars().count() > MAX_ENTRY_CHARS {
        return Err(StoreError::InvalidEntry(format!(
            "Message must be shorter than {} characters.",
            MAX_ENTRY_CHARS
        ))
        .into());
    }
    Ok(())
}

/// Parse `createdAt` out of object metadata. Key lookup ignores case
/// because S3 lowercases user metadata names.
fn created_at_from(key: &str, metadata: &Metadata) -> Result<DateTime<Utc>> {
    let raw = metadata
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(CREATED_AT))
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| StoreError::InvalidMetadata {
            key: key.to_string(),
            reason: format!("missing {}", CREATED_AT),
        })?;

    entry::parse_created_at(raw).ok_or_else(|| {
        StoreError::InvalidMetadata {
            key: key.to_string(),
            reason: format!("unparseable {}: {}", CREATED_AT, raw),
        }
        .into()
    })
}
