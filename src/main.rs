//! Quack - a mini encrypted journal, 280 characters at a time.

use std::path::Path;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quack::cli::output;
use quack::cli::{execute, Cli};
use quack::core::config::{self, Config};
use quack::core::constants::{DOTENV_FILE, LOG_VAR};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("quack=debug")
        } else {
            EnvFilter::new("quack=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    let result = config::load_dotenv(Path::new(DOTENV_FILE))
        .and_then(|_| Config::resolve())
        .and_then(|config| {
            debug!(backend = %config.storage.kind(), "starting");
            execute(cli.command, &config)
        });

    match result {
        Ok(message) => {
            if !message.is_empty() {
                println!("{}", message);
            }
        }
        Err(e) => {
            debug!(error = %e, "command failed");
            output::error(&e.user_message());
            if let Some(hint) = e.hint() {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}
