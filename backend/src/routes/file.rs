//! Resolve handler: mints presigned download URLs for stored files

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    file_storage::{FileStorage, StorageError},
    routes::parse_expiry_secs,
    types::AppError,
};

/// Query parameters accepted by the resolve endpoint
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ResolveQuery {
    /// Requested signed-URL lifetime in seconds; defaults to 3600
    pub expiry: Option<String>,
}

/// Signed-URL payload returned to the caller
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ResolveResponse {
    /// Time-limited presigned download URL
    pub url: String,
}

/// Mints a presigned download URL for a previously stored object.
///
/// The key is probed first: presigning is a local computation and would
/// otherwise sign a URL for an object that does not exist.
///
/// # Errors
///
/// - `500 INTERNAL_SERVER_ERROR` - The key is not present in the bucket,
///   or the provider call failed; the provider message is passed through
#[instrument(skip(file_storage))]
pub async fn resolve_file(
    Extension(file_storage): Extension<Arc<FileStorage>>,
    Path(id): Path<String>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, AppError> {
    let expiry_secs = parse_expiry_secs(query.expiry.as_deref());

    if !file_storage.check_object_exists(&id).await? {
        return Err(StorageError::NotFound(id).into());
    }

    let url = file_storage.presigned_get_url(&id, expiry_secs).await?;

    Ok(Json(ResolveResponse { url }))
}
