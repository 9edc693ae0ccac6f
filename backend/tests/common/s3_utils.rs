use aws_sdk_s3::Client as S3Client;

/// Creates the test bucket on LocalStack if it does not already exist
pub async fn ensure_bucket_exists(client: &S3Client, bucket: &str) {
    let exists = client.head_bucket().bucket(bucket).send().await.is_ok();

    if !exists {
        client
            .create_bucket()
            .bucket(bucket)
            .send()
            .await
            .expect("Failed to create test bucket");
    }
}

/// Checks whether an object exists in the bucket
pub async fn object_exists(client: &S3Client, bucket: &str, key: &str) -> bool {
    client
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .is_ok()
}
