//! Passphrase rotation command.

use dialoguer::Confirm;

use crate::cli::output;
use crate::core::rotate;
use crate::core::store::EntryStore;
use crate::error::Result;

/// Re-encrypt all entries under `new_passphrase`.
///
/// Asks for confirmation unless `yes` is set.
pub fn execute(store: &dyn EntryStore, new_passphrase: &str, yes: bool) -> Result<String> {
    if !yes && !confirm()? {
        return Ok("Rotation cancelled.".to_string());
    }

    let report = rotate::rotate(store, new_passphrase)?;

    let mut lines = vec![output::success(&format!(
        "Re-encrypted {} entr{}.",
        report.rotated.len(),
        if report.rotated.len() == 1 { "y" } else { "ies" }
    ))];

    for (key, reason) in &report.failed {
        lines.push(output::warn(&format!("{}: {}", output::key(key), reason)));
    }
    if !report.is_complete() {
        lines.push(output::warn(&format!(
            "{} entr{} still use the old QUACKWORD.",
            report.failed.len(),
            if report.failed.len() == 1 { "y" } else { "ies" }
        )));
    }

    lines.push("Update your QUACKWORD environment variable to the new value.".to_string());
    Ok(lines.join("\n"))
}

fn confirm() -> Result<bool> {
    Confirm::new()
        .with_prompt("Re-encrypt every entry with the new QUACKWORD?")
        .default(false)
        .interact()
        .map_err(Into::into)
}
