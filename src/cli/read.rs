//! Read entries.

use tracing::debug;

use crate::core::store::EntryStore;
use crate::error::Result;

/// Decrypt, filter, and format every entry, newest first.
///
/// Entries are separated by a blank line. Any decryption failure aborts
/// the whole read; no partial listing is printed.
pub fn execute(store: &dyn EntryStore, verbose: bool, search: &str, date: &str) -> Result<String> {
    let mut entries = store.read()?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut shown = Vec::with_capacity(entries.len());
    for entry in &mut entries {
        let text = entry.transform(verbose, search, date)?;
        if !text.is_empty() {
            shown.push(text);
        }
    }

    debug!(total = entries.len(), shown = shown.len(), "read entries");
    Ok(shown.join("\n\n"))
}
