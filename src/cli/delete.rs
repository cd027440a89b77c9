//! Delete an entry.

use tracing::debug;

use crate::core::store::EntryStore;
use crate::error::Result;

/// Delete the entry under `key`.
///
/// The entry is looked up and decrypted first, so a missing key reports
/// "not found" on every backend and the wrong passphrase cannot delete
/// entries it could not read.
pub fn execute(store: &dyn EntryStore, key: &str) -> Result<String> {
    let mut entry = store.read_by_key(key)?;
    entry.set_decrypted_content()?;

    store.delete(key)?;
    debug!(key = %key, "deleted");
    Ok("Entry deleted.".to_string())
}
