//! `quack read` tests.

use crate::support::*;

#[test]
fn test_read_shows_all_entries() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t.read(&[]);
    assert_success(&output);
    for entry in STANDARD_ENTRIES {
        assert_stdout_contains(&output, entry);
    }
}

#[test]
fn test_read_newest_first() {
    let t = Test::new();
    assert_success(&t.new_entry("first"));
    assert_success(&t.new_entry("second"));

    let out = stdout(&t.read(&[]));
    assert!(out.find("second").unwrap() < out.find("first").unwrap());
}

#[test]
fn test_read_separates_with_blank_line() {
    let t = Test::with_entries(&["one", "two"]);
    let out = stdout(&t.read(&[]));
    assert_eq!(out.trim_end().split("\n\n").count(), 2);
}

#[test]
fn test_read_search() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t.read(&["--search", "CAT"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Fed the cat twice");
    assert!(!stdout(&output).contains("dog"));
}

#[test]
fn test_read_date_filter_excludes_other_days() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t.read(&["--date", "November 10, 2009"]);
    assert_success(&output);
    assert!(stdout(&output).trim().is_empty());
}

#[test]
fn test_read_verbose_shows_keys() {
    let t = Test::with_entries(&["hello"]);
    let key = t.stored_keys().remove(0);

    let output = t.read(&["-v"]);
    assert_success(&output);
    assert_stdout_contains(&output, &format!(" - {}", key));
}

#[test]
fn test_read_empty_journal() {
    let t = Test::new();
    let output = t.read(&[]);
    assert_success(&output);
    assert!(stdout(&output).trim().is_empty());
}

#[test]
fn test_read_wrong_quackword() {
    let t = Test::with_entries(&["hello"]);

    let output = t.cmd().env("QUACKWORD", "wrong").arg("read").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Failed to retrieve entries. Make sure your QUACKWORD environment variable is correct.",
    );
    assert!(!stdout(&output).contains("hello"));
}
