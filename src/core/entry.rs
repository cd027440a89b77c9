//! Journal entries and their display pipeline.
//!
//! Raw entries come out of storage holding ciphertext only. For display
//! they are decrypted, filtered by search term and calendar date, and
//! formatted, in that order (see [`Entry::transform`]).

use chrono::{DateTime, Local, TimeZone, Utc};
use sha2::{Digest, Sha256};

use crate::core::cipher;
use crate::core::constants::{CREATED_AT_LAYOUT, DATE_LAYOUT, DISPLAY_LAYOUT};
use crate::error::Result;

/// One journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique key, assigned at creation and never changed.
    pub key: String,
    /// Time of first creation; preserved across updates.
    pub created_at: DateTime<Utc>,
    /// Base64 ciphertext blob.
    pub content: String,
    /// Plaintext, populated on demand and never persisted.
    pub decrypted_content: Option<String>,
}

impl Entry {
    /// Build an entry from stored parts.
    pub fn new(key: impl Into<String>, created_at: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            created_at,
            content: content.into(),
            decrypted_content: None,
        }
    }

    /// Decrypt `content` with the passphrase from `QUACKWORD` and cache it.
    pub fn set_decrypted_content(&mut self) -> Result<&str> {
        let plain = cipher::decrypt(&self.content)?;
        Ok(self.decrypted_content.insert(plain).as_str())
    }

    /// Decrypted content, or an empty string if not yet decrypted.
    pub fn plaintext(&self) -> &str {
        self.decrypted_content.as_deref().unwrap_or_default()
    }

    /// Whether the entry passes the search and date filters in local time.
    pub fn filter(&self, search: &str, date: &str) -> bool {
        self.filter_in(&Local, search, date)
    }

    /// [`Entry::filter`] with an explicit timezone for the date match.
    ///
    /// - `date`, if non-empty, must equal the creation date formatted as
    ///   "November 10, 2009" (exact, case-sensitive)
    /// - `search`, if non-empty, must be a case-insensitive substring of
    ///   the decrypted content
    pub fn filter_in<Tz: TimeZone>(&self, tz: &Tz, search: &str, date: &str) -> bool
    where
        Tz::Offset: std::fmt::Display,
    {
        if !date.is_empty() {
            let created = self
                .created_at
                .with_timezone(tz)
                .format(DATE_LAYOUT)
                .to_string();
            if created != date {
                return false;
            }
        }

        if !search.is_empty()
            && !self
                .plaintext()
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }

        true
    }

    /// Pretty-print the entry in local time.
    pub fn format(&self, verbose: bool) -> String {
        self.format_in(&Local, verbose)
    }

    /// [`Entry::format`] with an explicit timezone.
    ///
    /// `"<date> - <time> <zone>\n<content>"`; verbose mode adds
    /// `" - <key>"` after the zone.
    pub fn format_in<Tz: TimeZone>(&self, tz: &Tz, verbose: bool) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let stamp = self.created_at.with_timezone(tz).format(DISPLAY_LAYOUT);
        if verbose {
            format!("{} - {}\n{}", stamp, self.key, self.plaintext())
        } else {
            format!("{}\n{}", stamp, self.plaintext())
        }
    }

    /// Decrypt, filter, and format for display.
    ///
    /// Returns an empty string when the entry is filtered out.
    ///
    /// # Errors
    ///
    /// Returns the passphrase or cipher error if decryption fails.
    pub fn transform(&mut self, verbose: bool, search: &str, date: &str) -> Result<String> {
        self.set_decrypted_content()?;
        if !self.filter(search, date) {
            return Ok(String::new());
        }
        Ok(self.format(verbose))
    }
}

/// Generate a new entry key: hex SHA-256 of the nanosecond timestamp.
///
/// Collisions require two creations within the same nanosecond and are
/// not checked for.
pub fn generate_key(now: DateTime<Utc>) -> String {
    let stamp = now.format(CREATED_AT_LAYOUT).to_string();
    format!("{:x}", Sha256::digest(stamp.as_bytes()))
}

/// Whether `key` has the shape produced by [`generate_key`].
pub fn is_valid_key(key: &str) -> bool {
    key.len() == 64 && key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Render `created_at` for storage metadata.
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format(CREATED_AT_LAYOUT).to_string()
}

/// Parse a stored `createdAt` value.
pub fn parse_created_at(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value.trim(), CREATED_AT_LAYOUT)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
