//! Local directory bucket.
//!
//! Each entry is one file named by its key holding the ciphertext line,
//! plus a `<key>.attrs` JSON sidecar holding its metadata. Both are
//! written through a temp file and renamed into place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Bucket, Metadata};
use crate::error::{Result, StoreError};

/// Suffix of metadata sidecar files.
const ATTRS_SUFFIX: &str = ".attrs";

/// On-disk sidecar layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Attrs {
    #[serde(default)]
    metadata: Metadata,
}

/// Bucket rooted at a local directory.
pub struct Filesystem {
    dir: PathBuf,
}

impl Filesystem {
    /// Open a bucket at `dir`. The directory is created on first write.
    pub fn open(dir: &Path) -> Result<Self> {
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn data_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn attrs_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}", key, ATTRS_SUFFIX))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(StoreError::Io)?;
            restrict(&self.dir, 0o700)?;
            debug!(dir = %self.dir.display(), "created store directory");
        }
        Ok(())
    }
}

impl Bucket for Filesystem {
    fn put(&self, key: &str, data: &[u8], metadata: &Metadata) -> Result<()> {
        self.ensure_dir()?;

        let attrs = Attrs {
            metadata: metadata.clone(),
        };
        let attrs_json = serde_json::to_vec(&attrs)
            .map_err(|e| StoreError::Backend(format!("failed to encode metadata: {}", e)))?;

        // Sidecar first so a visible data file always has its metadata.
        write_atomic(&self.attrs_path(key), &attrs_json)?;
        write_atomic(&self.data_path(key), data)?;
        trace!(key = %key, bytes = data.len(), "wrote entry file");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        match fs::read(self.data_path(key)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()).into())
            }
            Err(e) => Err(StoreError::Io(e).into()),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for dir_entry in fs::read_dir(&self.dir).map_err(StoreError::Io)? {
            let dir_entry = dir_entry.map_err(StoreError::Io)?;
            if !dir_entry.file_type().map_err(StoreError::Io)?.is_file() {
                continue;
            }
            if let Some(name) = dir_entry.file_name().to_str() {
                // Sidecars and in-flight temp files are not objects.
                if !name.ends_with(ATTRS_SUFFIX) && !name.starts_with('.') {
                    keys.push(name.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.data_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(key.to_string()).into());
            }
            Err(e) => return Err(StoreError::Io(e).into()),
        }

        match fs::remove_file(self.attrs_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e).into()),
        }
    }

    fn metadata(&self, key: &str) -> Result<Metadata> {
        match fs::read(self.attrs_path(key)) {
            Ok(bytes) => {
                let attrs: Attrs =
                    serde_json::from_slice(&bytes).map_err(|e| StoreError::InvalidMetadata {
                        key: key.to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(attrs.metadata)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.data_path(key).exists() {
                    Ok(Metadata::new())
                } else {
                    Err(StoreError::NotFound(key.to_string()).into())
                }
            }
            Err(e) => Err(StoreError::Io(e).into()),
        }
    }
}

/// Write `data` to a sibling temp file, then rename it over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StoreError::Backend(format!("invalid path: {}", path.display())))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    {
        let mut file = fs::File::create(&tmp).map_err(StoreError::Io)?;
        file.write_all(data).map_err(StoreError::Io)?;
        file.sync_all().map_err(StoreError::Io)?;
    }
    restrict(&tmp, 0o600)?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::Io(e).into());
    }
    Ok(())
}

/// Restrict permissions (Unix only).
#[cfg(unix)]
fn restrict(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(StoreError::Io)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
