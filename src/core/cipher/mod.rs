//! Entry encryption.
//!
//! Entries are sealed with AES-256-GCM under a key derived from the
//! passphrase. A blob is `base64(nonce || ciphertext || tag)` with a fresh
//! random 96-bit nonce per call.
//!
//! The plain `encrypt`/`decrypt` functions read `QUACKWORD` on each call.
//! The `*_with_passphrase` variants take the passphrase explicitly and are
//! used by passphrase rotation.

mod key;

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use crate::core::passphrase;
use crate::error::{CipherError, Result};

pub use key::{derive_key, DerivedKey, KEY_LEN};

/// Nonce length for AES-GCM in bytes.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length for AES-GCM in bytes.
pub const TAG_LEN: usize = 16;

/// AES-256-GCM sealing and opening of single messages.
pub struct AesGcm;

impl AesGcm {
    /// Seal `plaintext` under `key`, returning the base64 blob.
    pub fn seal(&self, plaintext: &str, key: &DerivedKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let sealed = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| CipherError::Encryption("AEAD seal failed".to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
        blob.extend_from_slice(nonce.as_slice());
        blob.extend_from_slice(&sealed);

        let encoded = STANDARD.encode(blob);
        trace!(ciphertext_len = encoded.len(), "encrypted");
        Ok(encoded)
    }

    /// Open a base64 blob produced by [`AesGcm::seal`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Decryption` for malformed base64, blobs too
    /// short to hold a nonce and tag, authentication failure (wrong key or
    /// tampered data), or non-UTF-8 plaintext.
    pub fn open(&self, blob: &str, key: &DerivedKey) -> Result<String> {
        trace!(ciphertext_len = blob.len(), "decrypting");

        let decoded = STANDARD
            .decode(blob.trim())
            .map_err(|e| CipherError::Decryption(format!("invalid base64: {}", e)))?;

        if decoded.len() < NONCE_LEN + TAG_LEN {
            return Err(CipherError::Decryption(format!(
                "blob too short: {} bytes",
                decoded.len()
            ))
            .into());
        }

        let (nonce, sealed) = decoded.split_at(NONCE_LEN);
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| CipherError::Decryption("authentication failed".to_string()))?;

        let plaintext = String::from_utf8(plaintext)
            .map_err(|_| CipherError::Decryption("plaintext is not UTF-8".to_string()))?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}

/// Encrypt with the passphrase from `QUACKWORD`.
///
/// # Errors
///
/// Returns `PassphraseError::Missing` before doing any work if the
/// variable is unset, or `CipherError::Encryption` if sealing fails.
pub fn encrypt(plaintext: &str) -> Result<String> {
    let pass = passphrase::resolve()?;
    encrypt_with_passphrase(plaintext, &pass)
}

/// Decrypt with the passphrase from `QUACKWORD`.
pub fn decrypt(blob: &str) -> Result<String> {
    let pass = passphrase::resolve()?;
    decrypt_with_passphrase(blob, &pass)
}

/// Encrypt under an explicit passphrase.
pub fn encrypt_with_passphrase(plaintext: &str, passphrase: &str) -> Result<String> {
    let key = derive_key(passphrase)?;
    AesGcm.seal(plaintext, &key)
}

/// Decrypt under an explicit passphrase.
pub fn decrypt_with_passphrase(blob: &str, passphrase: &str) -> Result<String> {
    let key = derive_key(passphrase)?;
    AesGcm.open(blob, &key)
}
