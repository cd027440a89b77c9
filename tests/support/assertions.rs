//! Assertions over `quack` process output.
//!
//! Failure messages carry the exit status and both streams.

use std::process::Output;

/// Lossy UTF-8 view of stdout.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy UTF-8 view of stderr.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn describe(output: &Output) -> String {
    format!(
        "status: {}\n--- stdout ---\n{}\n--- stderr ---\n{}",
        output.status,
        stdout(output),
        stderr(output)
    )
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected quack to succeed\n{}",
        describe(output)
    );
}

pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected quack to fail\n{}",
        describe(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    assert!(
        stdout(output).contains(needle),
        "stdout lacks {:?}\n{}",
        needle,
        describe(output)
    );
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    assert!(
        stderr(output).contains(needle),
        "stderr lacks {:?}\n{}",
        needle,
        describe(output)
    );
}
