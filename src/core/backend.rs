//! Storage backend selection.
//!
//! Picks where entries live from environment signals, in priority order:
//!
//! 1. **S3** when every variable in [`S3_SIGNALS`] is set
//! 2. **GCS** when every variable in [`GCS_SIGNALS`] is set
//! 3. **Local** filesystem otherwise
//!
//! A partially configured provider is treated as absent, not as an error.
//! Selection happens once at startup (see `Config::resolve`) and the result
//! is handed to `Storage` by value.

use tracing::debug;

use crate::core::constants::{GCS_SIGNALS, S3_SIGNALS};

/// Where entries are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Local filesystem under the store directory.
    Local,
    /// Amazon S3 bucket.
    S3,
    /// Google Cloud Storage bucket.
    Gcs,
}

impl BackendKind {
    /// Detect the backend through a variable lookup such as
    /// `|name| std::env::var(name).ok()`.
    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let complete = |signals: &[&str]| {
            signals
                .iter()
                .all(|name| lookup(name).is_some_and(|v| !v.trim().is_empty()))
        };

        let kind = if complete(S3_SIGNALS) {
            Self::S3
        } else if complete(GCS_SIGNALS) {
            Self::Gcs
        } else {
            Self::Local
        };

        debug!(backend = kind.name(), "selected storage backend");
        kind
    }

    /// Whether a remote provider is configured.
    pub fn present(&self) -> bool {
        !matches!(self, Self::Local)
    }

    /// Backend name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::S3 => "s3",
            Self::Gcs => "gcs",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
