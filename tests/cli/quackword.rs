//! `quack quackword` tests.

use crate::support::*;

#[test]
fn test_quackword_rotates_entries() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t.quackword("new-password");
    assert_success(&output);
    assert_stdout_contains(&output, "Re-encrypted 3 entries.");
    assert_stdout_contains(&output, "Update your QUACKWORD");

    let old = t.read(&[]);
    assert_failure(&old);

    let new = t
        .cmd()
        .env("QUACKWORD", "new-password")
        .arg("read")
        .output()
        .unwrap();
    assert_success(&new);
    for entry in STANDARD_ENTRIES {
        assert_stdout_contains(&new, entry);
    }
}

#[test]
fn test_quackword_keeps_keys() {
    let t = Test::with_entries(&["stable key"]);
    let before = t.stored_keys();

    assert_success(&t.quackword("new-password"));
    assert_eq!(t.stored_keys(), before);
}

#[test]
fn test_quackword_same_passphrase_rejected() {
    let t = Test::with_entries(&["hello"]);

    let output = t.quackword(PASSPHRASE);
    assert_failure(&output);
    assert_stderr_contains(&output, "matches the current one");
}

#[test]
fn test_quackword_requires_current() {
    let t = Test::with_quackword(None);
    let output = t.quackword("new-password");
    assert_failure(&output);
    assert_stderr_contains(&output, MISSING_QUACKWORD);
}
