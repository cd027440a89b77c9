//! Test fixtures and constants.

/// Passphrase used by default test environments.
pub const PASSPHRASE: &str = "password";

/// Entries used across multiple tests.
pub const STANDARD_ENTRIES: &[&str] = &[
    "Walked the dog by the river",
    "Fed the cat twice",
    "Started reading a new book",
];

/// Message printed when QUACKWORD is missing.
pub const MISSING_QUACKWORD: &str =
    "Please set QUACKWORD environment variable with `export QUACKWORD=securepassword`.";

/// Message printed when a key matches no entry.
pub const NOT_FOUND: &str = "No entry found with that key.";
