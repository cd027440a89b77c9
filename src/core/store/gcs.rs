//! Google Cloud Storage bucket via the gcloud CLI.
//!
//! Enable with `--features gcp`.
//!
//! ## Requirements
//!
//! - `gcloud` CLI installed and authenticated
//! - `storage.objects.*` permissions on the bucket named by `GCS_BUCKET_NAME`
//!
//! Each call runs one `gcloud storage` subcommand scoped to
//! `GCS_PROJECT_ID`, with a 30 second HTTP timeout.

use std::io::Write;
use std::process::{Child, Command, Output, Stdio};

use serde::Deserialize;
use tracing::{debug, trace};

use super::{Bucket, Metadata};
use crate::core::constants::REQUEST_TIMEOUT_SECS;
use crate::error::{Result, StoreError};

/// Bucket backed by a GCS bucket.
pub struct GcsBucket {
    bucket: String,
    project: String,
}

/// Subset of `gcloud storage objects describe --format=json`.
#[derive(Debug, Deserialize)]
struct ObjectDescription {
    #[serde(default, alias = "metadata")]
    custom_fields: Metadata,
}

impl GcsBucket {
    /// Open `bucket` in `project`, checking that gcloud is installed.
    pub fn open(bucket: &str, project: &str) -> Result<Self> {
        which::which("gcloud").map_err(|_| {
            StoreError::Backend(
                "gcloud CLI not found. Install it from https://cloud.google.com/sdk/docs/install"
                    .to_string(),
            )
        })?;

        debug!(bucket = %bucket, project = %project, "using GCS");
        Ok(Self {
            bucket: bucket.to_string(),
            project: project.to_string(),
        })
    }

    fn url(&self, key: &str) -> String {
        format!("gs://{}/{}", self.bucket, key)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("gcloud");
        cmd.env("CLOUDSDK_CORE_HTTP_TIMEOUT", REQUEST_TIMEOUT_SECS.to_string())
            .args(["--project", &self.project, "--quiet", "storage"]);
        cmd
    }

    /// Run `gcloud storage <args>` and return its output, mapping
    /// "not found" failures for `key`.
    fn run(&self, op: &str, key: Option<&str>, args: &[&str]) -> Result<Output> {
        trace!(op = op, "running gcloud storage");
        let output = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| StoreError::Backend(format!("failed to run gcloud: {}", e)))?;
        check(op, key, output)
    }
}

/// Write `data` to the child's stdin and close it. On failure the child
/// is killed and reaped before the error is returned.
fn feed(child: &mut Child, data: &[u8]) -> Result<()> {
    let Some(mut stdin) = child.stdin.take() else {
        return Ok(());
    };
    if let Err(e) = stdin.write_all(data) {
        drop(stdin);
        let _ = child.kill();
        let _ = child.wait();
        return Err(StoreError::Backend(format!("failed to write to gcloud: {}", e)).into());
    }
    Ok(())
}

fn check(op: &str, key: Option<&str>, output: Output) -> Result<Output> {
    if output.status.success() {
        return Ok(output);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if let Some(key) = key {
        if is_not_found(&stderr) {
            return Err(StoreError::NotFound(key.to_string()).into());
        }
    }
    Err(StoreError::Backend(format!("GCS {} failed: {}", op, stderr.trim())).into())
}

fn is_not_found(stderr: &str) -> bool {
    let lower = stderr.to_lowercase();
    lower.contains("not found") || lower.contains("no urls matched") || lower.contains("404")
}

impl Bucket for GcsBucket {
    fn put(&self, key: &str, data: &[u8], metadata: &Metadata) -> Result<()> {
        let custom = metadata
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",");
        let custom_flag = format!("--custom-metadata={}", custom);
        let url = self.url(key);

        let mut child = self
            .command()
            .args(["cp", "-", &url, &custom_flag])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| StoreError::Backend(format!("failed to run gcloud: {}", e)))?;

        feed(&mut child, data)?;

        let output = child
            .wait_with_output()
            .map_err(|e| StoreError::Backend(format!("gcloud did not finish: {}", e)))?;
        check("put", None, output)?;
        trace!(key = %key, bytes = data.len(), "GCS put");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        let url = self.url(key);
        let output = self.run("get", Some(key), &["cat", &url])?;
        Ok(output.stdout)
    }

    fn list(&self) -> Result<Vec<String>> {
        let prefix = format!("gs://{}/", self.bucket);
        let output = self.run("list", None, &["ls", &prefix])?;

        let keys: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter_map(|line| line.trim().strip_prefix(&prefix))
            .filter(|key| !key.is_empty() && !key.ends_with('/'))
            .map(str::to_string)
            .collect();
        trace!(count = keys.len(), "GCS list");
        Ok(keys)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let url = self.url(key);
        self.run("delete", Some(key), &["rm", &url])?;
        Ok(())
    }

    fn metadata(&self, key: &str) -> Result<Metadata> {
        let url = self.url(key);
        let output = self.run(
            "describe",
            Some(key),
            &["objects", "describe", &url, "--format=json"],
        )?;
        parse_description(key, &output.stdout)
    }
}

fn parse_description(key: &str, json: &[u8]) -> Result<Metadata> {
    let described: ObjectDescription =
        serde_json::from_slice(json).map_err(|e| StoreError::InvalidMetadata {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
    Ok(described.custom_fields)
}
