use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Extension, Router};
use share_backend::{file_storage::FileStorage, routes, types::Environment};
use tower::ServiceExt;

use super::s3_utils::ensure_bucket_exists;
use super::utils::TEST_BOUNDARY;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup with core dependencies
#[allow(dead_code)]
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
    pub s3_client: Arc<S3Client>,
    pub bucket_name: String,
    pub file_storage: Arc<FileStorage>,
}

impl TestSetup {
    pub async fn new() -> Self {
        setup_test_env();

        let environment = Environment::Development;

        let s3_config = environment.s3_client_config().await;
        let s3_client = Arc::new(S3Client::from_conf(s3_config));
        let bucket_name = environment.s3_bucket();

        ensure_bucket_exists(&s3_client, &bucket_name).await;

        let file_storage = Arc::new(FileStorage::new(s3_client.clone(), bucket_name.clone()));

        let router = routes::handler()
            .layer(Extension(environment.clone()))
            .layer(Extension(file_storage.clone()))
            .into();

        Self {
            router,
            environment,
            s3_client,
            bucket_name,
            file_storage,
        }
    }

    /// POST a multipart/form-data body built with `build_multipart_body`
    pub async fn send_upload_request(
        &self,
        route: &str,
        body: Vec<u8>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={TEST_BOUNDARY}"),
            )
            .body(Body::from(body))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}
