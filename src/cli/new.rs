//! Write a new entry.

use tracing::debug;

use crate::cli::output;
use crate::core::store::EntryStore;
use crate::error::Result;

/// Join `words` with spaces and store them as a new entry.
pub fn execute(store: &dyn EntryStore, words: &[String], verbose: bool) -> Result<String> {
    let text = words.join(" ");
    debug!(chars = text.chars().count(), "writing entry");

    let entry = store.create(&text)?;
    if verbose {
        Ok(format!("Entry saved. {}", output::key(&entry.key)))
    } else {
        Ok("Entry saved.".to_string())
    }
}
