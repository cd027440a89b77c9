//! Error types.
//!
//! Each layer owns a small error enum; [`Error`] wraps them so `?` works
//! across layers. The CLI never shows these messages verbatim for cipher
//! failures; it goes through [`Error::user_message`].

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Passphrase(#[from] PassphraseError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Passphrase resolution errors.
#[derive(Error, Debug)]
pub enum PassphraseError {
    #[error("Please set QUACKWORD environment variable with `export QUACKWORD=securepassword`.")]
    Missing,

    #[error("the new QUACKWORD matches the current one")]
    Unchanged,
}

/// Encryption and decryption errors.
///
/// The payload is for logs only; it never carries key material.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: {0}")]
    Decryption(String),
}

/// Storage backend errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("entry not found: {0}")]
    NotFound(String),

    #[error("invalid entry key: {0}")]
    InvalidKey(String),

    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    #[error("invalid metadata for {key}: {reason}")]
    InvalidMetadata { key: String, reason: String },

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("{backend} storage is configured but not compiled in. Rebuild with: cargo install quack --features {feature}")]
    BackendUnavailable {
        backend: &'static str,
        feature: &'static str,
    },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    HomeDir,

    #[error("failed to read config file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Error {
    /// Short message suitable for the terminal.
    ///
    /// Cipher failures collapse to generic text so nothing about the
    /// ciphertext or key leaks to the user.
    pub fn user_message(&self) -> String {
        match self {
            Error::Passphrase(e) => e.to_string(),
            Error::Cipher(CipherError::Encryption(_)) => "Entry failed to save.".to_string(),
            Error::Cipher(CipherError::Decryption(_)) => {
                "Failed to retrieve entries. Make sure your QUACKWORD environment variable is correct."
                    .to_string()
            }
            Error::Store(StoreError::NotFound(_)) | Error::Store(StoreError::InvalidKey(_)) => {
                "No entry found with that key.".to_string()
            }
            Error::Store(StoreError::InvalidEntry(reason)) => reason.clone(),
            Error::Store(e @ StoreError::BackendUnavailable { .. }) => e.to_string(),
            Error::Store(_) => "Unable to reach entry storage.".to_string(),
            Error::Config(e) => e.to_string(),
            Error::Prompt(_) => "Confirmation prompt failed.".to_string(),
        }
    }

    /// Optional follow-up suggestion for the user.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Passphrase(PassphraseError::Missing) => Some("export QUACKWORD=<your passphrase>"),
            Error::Store(StoreError::NotFound(_)) | Error::Store(StoreError::InvalidKey(_)) => {
                Some("run `quack read --verbose` to see entry keys")
            }
            Error::Store(StoreError::Io(_)) | Error::Store(StoreError::Backend(_)) => {
                Some("run with --verbose for details")
            }
            _ => None,
        }
    }

    /// Whether this error means the requested entry does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Store(StoreError::NotFound(_)) | Error::Store(StoreError::InvalidKey(_))
        )
    }
}
