//! `quack new` tests.

use crate::support::*;

#[test]
fn test_new_saves_entry() {
    let t = Test::new();

    let output = t.new_entry("Oh hey there");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "Entry saved.");
    assert_eq!(t.stored_keys().len(), 1);
}

#[test]
fn test_new_file_holds_ciphertext_only() {
    let t = Test::new();
    assert_success(&t.new_entry("very private thought"));

    let key = &t.stored_keys()[0];
    let raw = std::fs::read_to_string(t.store_dir().join(key)).unwrap();
    assert!(!raw.contains("private"));
    assert!(raw.ends_with('\n'));

    let attrs = std::fs::read_to_string(t.store_dir().join(format!("{}.attrs", key))).unwrap();
    assert!(attrs.contains("\"createdAt\""));
}

#[test]
fn test_new_verbose_prints_key() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["new", "--verbose", "hello"])
        .output()
        .unwrap();
    assert_success(&output);

    let key = &t.stored_keys()[0];
    assert_stdout_contains(&output, key);
}

#[test]
fn test_new_rejects_281_chars() {
    let t = Test::new();

    let output = t.cmd().args(["new", &"x".repeat(281)]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "Message must be shorter than 280 characters.");
    assert!(t.stored_keys().is_empty());
}

#[test]
fn test_new_accepts_280_chars() {
    let t = Test::new();
    let output = t.cmd().args(["new", &"x".repeat(280)]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_new_requires_words() {
    let t = Test::new();
    let output = t.cmd().arg("new").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_new_respects_quack_dir() {
    let t = Test::new();
    let custom = t.dir.path().join("journal");

    let output = t
        .cmd()
        .env("QUACK_DIR", &custom)
        .args(["new", "elsewhere"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(custom.exists());
    assert!(t.stored_keys().is_empty());
}
