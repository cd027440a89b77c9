//! Command-line interface.
//!
//! Each command lives in its own module with an `execute` function that
//! returns the message to print on success. Errors bubble up to `main`,
//! which renders them through [`crate::error::Error::user_message`].

pub mod completions;
pub mod delete;
pub mod new;
pub mod output;
pub mod quackword;
pub mod read;
pub mod status;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::store::Storage;
use crate::error::Result;

/// Quack - a mini encrypted journal, 280 characters at a time.
#[derive(Parser)]
#[command(
    name = "quack",
    about = "A mini encrypted journal, 280 characters at a time",
    version,
    after_help = "Set QUACKWORD to your passphrase before writing or reading. 🦆"
)]
pub struct Cli {
    /// Enable debug logging (override with QUACK_LOG)
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a new entry
    New {
        /// Show the new entry's key
        #[arg(short, long)]
        verbose: bool,
        /// Entry text; words are joined with spaces
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// Read entries, newest first
    Read {
        /// Show each entry's key
        #[arg(short, long)]
        verbose: bool,
        /// Only entries containing this text (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only entries written on this date, e.g. "November 10, 2009"
        #[arg(short, long, default_value = "")]
        date: String,
    },

    /// Delete an entry by key
    Delete {
        /// Entry key (see `quack read --verbose`)
        key: String,
    },

    /// Re-encrypt every entry under a new passphrase
    Quackword {
        /// New passphrase
        new: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show storage backend and entry count
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command against the configured store.
///
/// # Returns
///
/// Message to print on success (possibly empty).
pub fn execute(command: Command, config: &Config) -> Result<String> {
    let store = Storage::from_config(config);
    match command {
        Command::New { verbose, words } => new::execute(&store, &words, verbose),
        Command::Read {
            verbose,
            search,
            date,
        } => read::execute(&store, verbose, &search, &date),
        Command::Delete { key } => delete::execute(&store, &key),
        Command::Quackword { new, yes } => quackword::execute(&store, &new, yes),
        Command::Status => status::execute(&store, config),
        Command::Completions { shell } => completions::execute(shell),
    }
}
