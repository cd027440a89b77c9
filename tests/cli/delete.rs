//! `quack delete` tests.

use crate::support::*;

#[test]
fn test_delete_existing_entry() {
    let t = Test::with_entries(&["delete me"]);
    let key = t.stored_keys().remove(0);

    let output = t.delete(&key);
    assert_success(&output);
    assert_stdout_contains(&output, "Entry deleted.");
    assert!(t.stored_keys().is_empty());
}

#[test]
fn test_delete_missing_key() {
    let t = Test::new();

    let output = t.delete(&"a".repeat(64));
    assert_failure(&output);
    assert_stderr_contains(&output, NOT_FOUND);
}

#[test]
fn test_delete_malformed_key() {
    let t = Test::new();

    let output = t.delete("../../etc/passwd");
    assert_failure(&output);
    assert_stderr_contains(&output, NOT_FOUND);
}

#[test]
fn test_delete_twice() {
    let t = Test::with_entries(&["once"]);
    let key = t.stored_keys().remove(0);

    assert_success(&t.delete(&key));
    let output = t.delete(&key);
    assert_failure(&output);
    assert_stderr_contains(&output, NOT_FOUND);
}

#[test]
fn test_end_to_end_lifecycle() {
    let t = Test::new();

    assert_success(&t.new_entry("Lifecycle entry"));
    let key = t.stored_keys().remove(0);
    assert_stdout_contains(&t.read(&["--verbose"]), &key);

    assert_success(&t.delete(&key));
    assert!(!stdout(&t.read(&[])).contains("Lifecycle entry"));
}
