//! S3-backed file storage operations
mod error;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{
    error::SdkError, operation::head_object::HeadObjectError, presigning::PresigningConfig,
    primitives::ByteStream, Client as S3Client,
};
use chrono::Utc;

pub use error::{StorageError, StorageResult};

/// File storage client for S3 operations
pub struct FileStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
}

impl FileStorage {
    /// Creates a new file storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket holding uploaded objects
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, bucket_name: String) -> Self {
        Self {
            s3_client,
            bucket_name,
        }
    }

    /// Replaces every character outside `[A-Za-z0-9.\-_]` with `_`.
    ///
    /// Path-safety for the storage key only, not a security boundary.
    #[must_use]
    pub fn sanitize_file_name(name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Derives the storage key for an uploaded file:
    /// `<millisecond-unix-timestamp>-<sanitized-name>`.
    ///
    /// The timestamp prefix keeps keys effectively unique; two uploads of
    /// an identically named file within the same millisecond collide and
    /// the later write wins (upsert).
    #[must_use]
    pub fn storage_key_for(original_name: &str) -> String {
        format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            Self::sanitize_file_name(original_name)
        )
    }

    /// Stores raw bytes under `key` with the given content type,
    /// overwriting any existing object at that key
    ///
    /// # Errors
    ///
    /// Returns `StorageError::S3Error` if the `PutObject` call fails
    pub async fn store_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()> {
        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await?;

        Ok(())
    }

    /// Checks if an object exists in the bucket
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if object exists
    /// * `Ok(false)` if object does not exist
    /// * `Err(StorageError)` if the S3 operation fails
    ///
    /// # Errors
    ///
    /// Returns `StorageError::S3Error` for S3 service errors
    /// Returns `StorageError::UpstreamError` for 5xx errors
    pub async fn check_object_exists(&self, key: &str) -> StorageResult<bool> {
        let result = self
            .s3_client
            .head_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(SdkError::ServiceError(service_err))
                if matches!(service_err.err(), HeadObjectError::NotFound(_)) =>
            {
                Ok(false)
            }
            Err(SdkError::ServiceError(service_err))
                if service_err.raw().status().as_u16() >= 500 =>
            {
                Err(StorageError::UpstreamError(format!("{service_err:?}")))
            }
            Err(e) => Err(StorageError::from(e)),
        }
    }

    /// Generates a presigned GET URL for `key`, valid for `expiry_secs`
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ConfigError` if the presigning config is
    /// rejected (e.g. an expiry beyond the SDK maximum)
    /// Returns `StorageError::S3Error` if URL generation fails
    pub async fn presigned_get_url(&self, key: &str, expiry_secs: u64) -> StorageResult<String> {
        let presigned_config = PresigningConfig::expires_in(Duration::from_secs(expiry_secs))
            .map_err(|e| {
                StorageError::ConfigError(format!("Failed to create presigning config: {e}"))
            })?;

        let presigned = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .presigned(presigned_config)
            .await
            .map_err(|e| StorageError::S3Error(format!("Failed to generate presigned URL: {e}")))?;

        Ok(presigned.uri().to_string())
    }
}
