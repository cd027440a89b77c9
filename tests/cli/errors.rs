//! Error output tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_missing_quackword_message() {
    let t = Test::with_quackword(None);

    let output = t.new_entry("hello");
    assert_failure(&output);
    assert_stderr_contains(&output, MISSING_QUACKWORD);
    assert!(!t.store_dir().exists());
}

#[test]
fn test_blank_quackword_is_missing() {
    let t = Test::with_quackword(Some("   "));

    let output = t.read(&[]);
    assert_success(&output);

    let output = t.new_entry("hello");
    assert_failure(&output);
    assert_stderr_contains(&output, MISSING_QUACKWORD);
}

#[test]
fn test_full_s3_without_feature_reports_rebuild() {
    if cfg!(feature = "aws") {
        return;
    }
    let t = Test::new();

    let output = t
        .cmd()
        .env("S3_BUCKET_REGION", "us-east-1")
        .env("S3_BUCKET_NAME", "journal")
        .env("AWS_ACCESS_KEY_ID", "AKIA")
        .env("AWS_SECRET_ACCESS_KEY", "secret")
        .args(["read"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--features aws");
}

#[test]
fn test_malformed_config_file() {
    let t = Test::new();
    std::fs::write(t.home.path().join(".quack.toml"), "dir = [").unwrap();

    let output = t.read(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_dotenv_supplies_quackword() {
    let t = Test::with_quackword(None);
    std::fs::write(t.dir.path().join(".env"), "QUACKWORD=from-dotenv\n").unwrap();

    assert_success(&t.new_entry("dotenv entry"));

    let output = t
        .cmd()
        .env("QUACKWORD", "from-dotenv")
        .arg("read")
        .output()
        .unwrap();
    assert_stdout_contains(&output, "dotenv entry");
}

#[test]
fn test_completions() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quack"));
}

#[test]
fn test_unknown_command() {
    let t = Test::new();
    t.cmd()
        .arg("write")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
