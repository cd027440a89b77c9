//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables that would route a child process to a cloud backend.
const CLOUD_VARS: &[&str] = &[
    "S3_BUCKET_REGION",
    "S3_BUCKET_NAME",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "GCS_BUCKET_NAME",
    "GCS_PROJECT_ID",
];

impl Test {
    /// Create a quack command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - Cloud backend variables, QUACK_DIR and QUACK_LOG removed
    /// - QUACKWORD set or removed per the test environment
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("quack").expect("failed to find quack binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());

        for var in CLOUD_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("QUACK_DIR");
        cmd.env_remove("QUACK_LOG");

        match &self.quackword {
            Some(word) => cmd.env("QUACKWORD", word),
            None => cmd.env_remove("QUACKWORD"),
        };
        cmd
    }

    /// Shortcut for `quack new <text>`.
    pub fn new_entry(&self, text: &str) -> Output {
        self.cmd()
            .arg("new")
            .args(text.split(' '))
            .output()
            .expect("failed to run quack new")
    }

    /// Shortcut for `quack read` with extra arguments.
    pub fn read(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("read")
            .args(args)
            .output()
            .expect("failed to run quack read")
    }

    /// Shortcut for `quack delete <key>`.
    pub fn delete(&self, key: &str) -> Output {
        self.cmd()
            .args(["delete", key])
            .output()
            .expect("failed to run quack delete")
    }

    /// Shortcut for `quack quackword <new> --yes`.
    pub fn quackword(&self, new: &str) -> Output {
        self.cmd()
            .args(["quackword", new, "--yes"])
            .output()
            .expect("failed to run quack quackword")
    }

    /// Shortcut for `quack status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run quack status")
    }
}
