//! Shared CLI output helpers.
//!
//! Color scheme (console disables styling when NO_COLOR is set or the
//! stream is not a terminal):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, keys
//! - Dimmed: labels, secondary info

use console::style;
use std::fmt::Display;

/// Success message with checkmark.
pub fn success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}

/// Print an error message to stderr.
///
/// Example: `✗ No entry found with that key.`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").for_stderr().red(), msg);
}

/// Warning line.
pub fn warn(msg: &str) -> String {
    format!("{} {}", style("⚠").yellow(), msg)
}

/// Print a hint to stderr.
///
/// Example: `→ export QUACKWORD=<your passphrase>`
pub fn hint(msg: &str) {
    eprintln!(
        "{} {}",
        style("→").for_stderr().cyan(),
        style(msg).for_stderr().cyan()
    );
}

/// Label and value line (label dimmed, value bold).
///
/// Example: `  backend:  local`
pub fn kv(label: &str, value: impl Display) -> String {
    format!("  {}  {}", style(label).dim(), style(value).bold())
}

/// Format an entry key in cyan.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}
