//! Passphrase key derivation.

use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

use crate::error::{PassphraseError, Result};

/// Length of the AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// A symmetric key derived from a passphrase.
///
/// Key bytes are wiped from memory when the value is dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Raw key bytes. Use only for the immediate cipher operation.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive the entry key from a passphrase with SHA-256.
///
/// Deterministic: the same passphrase always yields the same key.
///
/// # Errors
///
/// Returns `PassphraseError::Missing` for an empty passphrase, so nothing
/// is ever sealed under the hash of the empty string.
pub fn derive_key(passphrase: &str) -> Result<DerivedKey> {
    if passphrase.is_empty() {
        return Err(PassphraseError::Missing.into());
    }

    let digest = Sha256::digest(passphrase.as_bytes());
    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(digest.as_slice());

    Ok(DerivedKey { key })
}
