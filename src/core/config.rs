//! Runtime configuration.
//!
//! Resolved once at startup from, in increasing precedence:
//!
//! - defaults (`~/.quack`)
//! - `~/.quack.toml`
//! - the environment, including a `.env` file in the working directory
//!
//! The result is an explicit [`Config`] value passed to `Storage`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::backend::BackendKind;
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Where and how entries are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Local directory, one file per entry.
    Local { dir: PathBuf },
    /// S3 bucket in a region.
    S3 { bucket: String, region: String },
    /// GCS bucket in a project.
    Gcs { bucket: String, project: String },
}

impl StorageConfig {
    /// Backend kind of this configuration.
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Local { .. } => BackendKind::Local,
            Self::S3 { .. } => BackendKind::S3,
            Self::Gcs { .. } => BackendKind::Gcs,
        }
    }

    /// Human-readable location.
    pub fn location(&self) -> String {
        match self {
            Self::Local { dir } => dir.display().to_string(),
            Self::S3 { bucket, region } => format!("s3://{} ({})", bucket, region),
            Self::Gcs { bucket, project } => format!("gs://{} ({})", bucket, project),
        }
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend and location.
    pub storage: StorageConfig,
    /// Config file that contributed to this configuration, if any.
    pub file: Option<PathBuf>,
}

/// Contents of `~/.quack.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    /// Local store directory.
    #[serde(default)]
    dir: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from the process environment and home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HomeDir` if local storage is selected without
    /// `QUACK_DIR` and the home directory is unknown, or a read/parse error
    /// for a malformed `~/.quack.toml`.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir();
        Self::resolve_with(|name| std::env::var(name).ok(), home.as_deref())
    }

    /// Resolve configuration through an arbitrary variable lookup and home.
    pub fn resolve_with<F>(lookup: F, home: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let (storage, file) = match BackendKind::detect_with(&lookup) {
            BackendKind::S3 => (
                StorageConfig::S3 {
                    bucket: var("S3_BUCKET_NAME").unwrap_or_default(),
                    region: var("S3_BUCKET_REGION").unwrap_or_default(),
                },
                None,
            ),
            BackendKind::Gcs => (
                StorageConfig::Gcs {
                    bucket: var("GCS_BUCKET_NAME").unwrap_or_default(),
                    project: var("GCS_PROJECT_ID").unwrap_or_default(),
                },
                None,
            ),
            BackendKind::Local => {
                let (dir, file) = match var(constants::DIR_VAR) {
                    Some(dir) => (PathBuf::from(dir), None),
                    None => {
                        let home = home.ok_or(ConfigError::HomeDir)?;
                        Self::local_dir(home)?
                    }
                };
                (StorageConfig::Local { dir }, file)
            }
        };

        debug!(location = %storage.location(), "configuration resolved");
        Ok(Self { storage, file })
    }

    /// Configuration for a local store at `dir`.
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig::Local { dir: dir.into() },
            file: None,
        }
    }

    /// Local directory from `~/.quack.toml`, falling back to `~/.quack`.
    fn local_dir(home: &Path) -> Result<(PathBuf, Option<PathBuf>)> {
        let path = home.join(constants::CONFIG_FILE);
        if !path.exists() {
            return Ok((home.join(constants::STORE_DIR), None));
        }

        debug!(path = %path.display(), "loading config file");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::Read)?;
        let parsed: FileConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        let dir = match parsed.dir {
            Some(dir) => match dir.strip_prefix("~") {
                Ok(rest) => home.join(rest),
                Err(_) => dir,
            },
            None => home.join(constants::STORE_DIR),
        };
        Ok((dir, Some(path)))
    }
}

/// Load `KEY=value` pairs from a dotenv file into the process environment.
///
/// Variables that are already set win. A missing file is not an error.
///
/// # Returns
///
/// Number of variables set.
pub fn load_dotenv(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }

    let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
    let mut count = 0;
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
            count += 1;
        }
    }

    debug!(path = %path.display(), count, "loaded dotenv file");
    Ok(count)
}

/// Parse dotenv contents. Skips blank lines and comments; strips quotes
/// and an optional `export ` prefix.
fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), dotenv_value(value.trim())))
        })
        .collect()
}

/// Unquote a dotenv value. Unquoted values end at ` #`.
fn dotenv_value(raw: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            if let Some(end) = rest.find(quote) {
                return rest[..end].to_string();
            }
        }
    }
    match raw.find(" #") {
        Some(at) => raw[..at].trim_end().to_string(),
        None => raw.to_string(),
    }
}
