//! Quick status overview command.

use crate::cli::output;
use crate::core::backend::BackendKind;
use crate::core::config::Config;
use crate::core::constants::PASSPHRASE_VAR;
use crate::core::passphrase;
use crate::core::store::EntryStore;
use crate::error::Result;

/// Show backend, location, passphrase presence, and entry count.
///
/// Never decrypts; an unreachable backend is reported inline rather than
/// failing the command.
pub fn execute(store: &dyn EntryStore, config: &Config) -> Result<String> {
    let mut lines = vec![
        output::kv("backend:", config.storage.kind()),
        output::kv("location:", config.storage.location()),
    ];

    if let Some(file) = &config.file {
        lines.push(output::kv("config:", file.display()));
    }

    let passphrase = if passphrase::resolve().is_ok() {
        "set"
    } else {
        "not set"
    };
    lines.push(output::kv(&format!("{}:", PASSPHRASE_VAR), passphrase));

    if config.storage.kind() == BackendKind::Gcs {
        let gcloud = if which::which("gcloud").is_ok() {
            "found"
        } else {
            "not found"
        };
        lines.push(output::kv("gcloud:", gcloud));
    }

    let entries = match store.read() {
        Ok(entries) => entries.len().to_string(),
        Err(e) => e.user_message(),
    };
    lines.push(output::kv("entries:", entries));

    Ok(lines.join("\n"))
}
