//! Passphrase resolution.
//!
//! The passphrase is read from `QUACKWORD` on every call so that a change
//! to the environment takes effect on the next operation.

use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::PASSPHRASE_VAR;
use crate::error::{PassphraseError, Result};

/// Resolve the passphrase from the process environment.
///
/// # Errors
///
/// Returns `PassphraseError::Missing` if `QUACKWORD` is unset or blank.
pub fn resolve() -> Result<Zeroizing<String>> {
    resolve_with(|name| std::env::var(name).ok())
}

/// Resolve the passphrase through an arbitrary variable lookup.
pub fn resolve_with<F>(lookup: F) -> Result<Zeroizing<String>>
where
    F: Fn(&str) -> Option<String>,
{
    let value = Zeroizing::new(lookup(PASSPHRASE_VAR).unwrap_or_default());
    if value.trim().is_empty() {
        trace!("passphrase missing");
        return Err(PassphraseError::Missing.into());
    }
    Ok(value)
}
