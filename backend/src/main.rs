use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use share_backend::{file_storage::FileStorage, server, types::Environment};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production (Datadog), regular format for development
    let env_filter = || {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
            .from_env_lossy()
    };
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter()).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter()).init();
        }
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let file_storage = Arc::new(FileStorage::new(s3_client, environment.s3_bucket()));

    server::start(environment, file_storage).await
}
