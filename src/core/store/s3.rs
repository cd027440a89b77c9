//! Amazon S3 bucket.
//!
//! Enable with `--features aws`. Credentials come from the standard AWS
//! provider chain (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, ...);
//! the region and bucket come from `S3_BUCKET_REGION` and `S3_BUCKET_NAME`.
//!
//! S3 lowercases user metadata names, so `createdAt` comes back as
//! `createdat`. Deleting a missing key succeeds.

use std::collections::HashMap;
use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::{Bucket, Metadata};
use crate::core::constants::REQUEST_TIMEOUT_SECS;
use crate::error::{Result, StoreError};

/// Bucket backed by an S3 bucket.
///
/// Owns a single-threaded runtime for the async SDK; dropped with the handle.
pub struct S3Bucket {
    bucket: String,
    client: Client,
    rt: Runtime,
}

impl S3Bucket {
    /// Connect to `bucket` in `region`.
    pub fn open(bucket: &str, region: &str) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Backend(format!("failed to create runtime: {}", e)))?;

        let timeouts = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();

        let config = rt.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .timeout_config(timeouts)
                .load(),
        );

        debug!(bucket = %bucket, region = %region, "connected to S3");
        Ok(Self {
            bucket: bucket.to_string(),
            client: Client::new(&config),
            rt,
        })
    }
}

fn backend_error<E: std::error::Error>(op: &str, err: E) -> StoreError {
    StoreError::Backend(format!("S3 {} failed: {}", op, DisplayErrorContext(err)))
}

impl Bucket for S3Bucket {
    fn put(&self, key: &str, data: &[u8], metadata: &Metadata) -> Result<()> {
        trace!(key = %key, bytes = data.len(), "S3 put");
        let metadata: HashMap<String, String> = metadata.clone().into_iter().collect();

        self.rt.block_on(async {
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(key)
                .body(ByteStream::from(data.to_vec()))
                .set_metadata(Some(metadata))
                .send()
                .await
                .map_err(|e| backend_error("put", e))
        })?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        trace!(key = %key, "S3 get");
        let bytes = self.rt.block_on(async {
            let output = self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| {
                    if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                        StoreError::NotFound(key.to_string())
                    } else {
                        backend_error("get", e)
                    }
                })?;

            let bytes = output
                .body
                .collect()
                .await
                .map_err(|e| StoreError::Backend(format!("S3 read body failed: {}", e)))?;
            Ok::<_, StoreError>(bytes.into_bytes().to_vec())
        })?;
        Ok(bytes)
    }

    fn list(&self) -> Result<Vec<String>> {
        let keys = self.rt.block_on(async {
            let mut keys = Vec::new();
            let mut token: Option<String> = None;

            loop {
                let output = self
                    .client
                    .list_objects_v2()
                    .bucket(&self.bucket)
                    .set_continuation_token(token.take())
                    .send()
                    .await
                    .map_err(|e| backend_error("list", e))?;

                keys.extend(
                    output
                        .contents()
                        .iter()
                        .filter_map(|object| object.key().map(str::to_string)),
                );

                match output.next_continuation_token() {
                    Some(next) if output.is_truncated().unwrap_or(false) => {
                        token = Some(next.to_string());
                    }
                    _ => break,
                }
            }

            Ok::<_, StoreError>(keys)
        })?;
        trace!(count = keys.len(), "S3 list");
        Ok(keys)
    }

    fn delete(&self, key: &str) -> Result<()> {
        trace!(key = %key, "S3 delete");
        self.rt.block_on(async {
            self.client
                .delete_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| backend_error("delete", e))
        })?;
        Ok(())
    }

    fn metadata(&self, key: &str) -> Result<Metadata> {
        let output = self.rt.block_on(async {
            self.client
                .head_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| {
                    if e.as_service_error().is_some_and(|se| se.is_not_found()) {
                        StoreError::NotFound(key.to_string())
                    } else {
                        backend_error("head", e)
                    }
                })
        })?;

        Ok(output
            .metadata()
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default())
    }
}
