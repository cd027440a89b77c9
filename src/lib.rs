//! Quack - a mini encrypted journal, 280 characters at a time.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── new           # Write an entry
//! │   ├── read          # Decrypt, filter, and print entries
//! │   ├── delete        # Remove an entry by key
//! │   ├── quackword     # Rotate the passphrase
//! │   ├── status        # Show backend and configuration
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # AES-256-GCM with a passphrase-derived key
//!     ├── passphrase    # QUACKWORD resolution
//!     ├── backend       # Local / S3 / GCS selection
//!     ├── config        # ~/.quack.toml, .env, and the environment
//!     ├── entry         # Entry type, keys, filter, and format
//!     ├── rotate        # Passphrase rotation
//!     └── store/        # Entry storage
//!         ├── mod       # Bucket and EntryStore traits
//!         ├── fs        # Local directory
//!         ├── s3        # Amazon S3 (feature "aws")
//!         └── gcs       # Google Cloud Storage (feature "gcp")
//! ```
//!
//! # Features
//!
//! - `aws`: S3 storage through the AWS SDK
//! - `gcp`: GCS storage through the gcloud CLI

pub mod cli;
pub mod core;
pub mod error;
