//! Constants used throughout quack.
//!
//! Centralizes environment variable names, layouts, and limits.

/// Environment variable carrying the encryption passphrase.
pub const PASSPHRASE_VAR: &str = "QUACKWORD";

/// Environment variable overriding the local store directory.
pub const DIR_VAR: &str = "QUACK_DIR";

/// Environment variable holding the tracing filter.
pub const LOG_VAR: &str = "QUACK_LOG";

/// Local store directory name relative to HOME (~/.quack).
pub const STORE_DIR: &str = ".quack";

/// Optional config file name relative to HOME (~/.quack.toml).
pub const CONFIG_FILE: &str = ".quack.toml";

/// Dotenv file loaded from the working directory at startup.
pub const DOTENV_FILE: &str = ".env";

/// Signals that together configure the S3 backend.
pub const S3_SIGNALS: &[&str] = &[
    "S3_BUCKET_REGION",
    "S3_BUCKET_NAME",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
];

/// Signals that together configure the GCS backend.
pub const GCS_SIGNALS: &[&str] = &["GCS_BUCKET_NAME", "GCS_PROJECT_ID"];

/// Metadata field holding an entry's creation time.
pub const CREATED_AT: &str = "createdAt";

/// Layout of the `createdAt` metadata value.
pub const CREATED_AT_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.9f%:z";

/// Calendar date layout used by the `--date` filter ("November 10, 2009").
pub const DATE_LAYOUT: &str = "%B %-d, %Y";

/// Display layout for an entry header ("November 10, 2009 - 11:00 PM UTC").
pub const DISPLAY_LAYOUT: &str = "%B %-d, %Y - %-I:%M %p %Z";

/// Maximum characters in one entry.
pub const MAX_ENTRY_CHARS: usize = 280;

/// Timeout applied to each network request against a cloud backend.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
