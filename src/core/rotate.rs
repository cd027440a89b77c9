//! Passphrase rotation.
//!
//! Re-encrypts every entry from the current `QUACKWORD` to a new
//! passphrase. Entries are rewritten one at a time through
//! [`EntryStore::update`], so keys and creation times survive.
//!
//! Rotation is best-effort: a failure on one entry is logged and counted,
//! and the remaining entries are still rotated. There is no rollback, so a
//! partial rotation leaves the store readable with two passphrases. The
//! returned [`RotationReport`] lists the keys that need attention.

use tracing::{debug, warn};

use crate::core::cipher;
use crate::core::passphrase;
use crate::core::store::EntryStore;
use crate::error::{PassphraseError, Result};

/// Outcome of a rotation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RotationReport {
    /// Keys re-encrypted under the new passphrase.
    pub rotated: Vec<String>,
    /// Keys left under the old passphrase, with the reason.
    pub failed: Vec<(String, String)>,
}

impl RotationReport {
    /// Whether every entry was rotated.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Re-encrypt every entry in `store` under `new_passphrase`.
///
/// # Errors
///
/// Returns `PassphraseError::Missing` if either passphrase is empty,
/// `PassphraseError::Unchanged` if the new one equals the current one, or
/// the store's error if entries cannot be listed. Per-entry failures are
/// reported in the [`RotationReport`] instead.
pub fn rotate(store: &dyn EntryStore, new_passphrase: &str) -> Result<RotationReport> {
    let current = passphrase::resolve()?;
    if new_passphrase.trim().is_empty() {
        return Err(PassphraseError::Missing.into());
    }
    if new_passphrase == current.as_str() {
        return Err(PassphraseError::Unchanged.into());
    }

    let entries = store.read()?;
    debug!(count = entries.len(), "rotating entries");

    let mut report = RotationReport::default();
    for mut entry in entries {
        let result = cipher::decrypt_with_passphrase(&entry.content, &current)
            .and_then(|plain| cipher::encrypt_with_passphrase(&plain, new_passphrase))
            .and_then(|sealed| {
                entry.content = sealed;
                store.update(&entry)
            });

        match result {
            Ok(()) => report.rotated.push(entry.key),
            Err(e) => {
                warn!(key = %entry.key, error = %e, "entry not rotated");
                report.failed.push((entry.key, e.user_message()));
            }
        }
    }

    debug!(
        rotated = report.rotated.len(),
        failed = report.failed.len(),
        "rotation finished"
    );
    Ok(report)
}
