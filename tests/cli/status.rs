//! `quack status` tests.

use crate::support::*;

#[test]
fn test_status_local_backend() {
    let t = Test::with_entries(&["one", "two"]);

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "backend:  local");
    assert_stdout_contains(&output, "QUACKWORD:  set");
    assert_stdout_contains(&output, "entries:  2");
}

#[test]
fn test_status_without_quackword() {
    let t = Test::with_quackword(None);

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "QUACKWORD:  not set");
}

#[test]
fn test_status_partial_s3_stays_local() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("S3_BUCKET_NAME", "journal")
        .env("S3_BUCKET_REGION", "us-east-1")
        .arg("status")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "backend:  local");
}

#[test]
fn test_status_reads_config_file() {
    let t = Test::new();
    std::fs::write(t.home.path().join(".quack.toml"), "dir = \"~/notes\"\n").unwrap();

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "notes");
    assert_stdout_contains(&output, ".quack.toml");
}
