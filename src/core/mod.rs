//! Core library components.
//!
//! Encryption, passphrase handling, backend selection, entry storage, and
//! the entry display pipeline. Nothing here prints; the CLI layer owns
//! all terminal output.

pub mod backend;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod entry;
pub mod passphrase;
pub mod rotate;
pub mod store;
