//! Upload handler: accepts one multipart file and relays it into storage

use std::sync::Arc;

use axum::{extract::Multipart, Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    file_storage::FileStorage,
    routes::parse_expiry_secs,
    types::{AppError, Environment},
};

/// Share descriptor returned after a successful upload
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Front-end link that resolves to the uploaded file
    pub share_url: String,
    /// Storage key the file was stored under
    pub file_id: String,
    /// Expiry hint in seconds, applied when a signed URL is minted later
    pub expires_in: u64,
}

/// One file part pulled out of the multipart form
#[derive(Debug)]
struct IncomingFile {
    name: String,
    content_type: String,
    data: Vec<u8>,
}

/// Stores a single uploaded file and returns its share descriptor.
///
/// Expects a multipart form with exactly one `file` part and an optional
/// `expiry` text part (seconds). The expiry is informational at this
/// stage; no signed URL is minted until the file is resolved.
///
/// # Errors
///
/// - `400 BAD_REQUEST` - No `file` part present, or the multipart form
///   could not be read
/// - `500 INTERNAL_SERVER_ERROR` - The storage provider rejected the
///   upload; the provider message is passed through
#[instrument(skip_all)]
pub async fn upload_file(
    Extension(environment): Extension<Environment>,
    Extension(file_storage): Extension<Arc<FileStorage>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (file, expiry) = read_upload_form(multipart).await?;

    let Some(file) = file else {
        return Err(AppError::bad_request("No file uploaded"));
    };

    info!("Received file: {}", file.name);

    let expires_in = parse_expiry_secs(expiry.as_deref());
    let file_id = FileStorage::storage_key_for(&file.name);

    file_storage
        .store_object(&file_id, file.data, &file.content_type)
        .await?;

    Ok(Json(UploadResponse {
        share_url: format!("{}/{}", environment.share_base_url(), file_id),
        file_id,
        expires_in,
    }))
}

/// Walks the multipart form and returns the `file` part (if any) together
/// with the raw `expiry` text. Parts under any other name are ignored.
async fn read_upload_form(
    mut multipart: Multipart,
) -> Result<(Option<IncomingFile>, Option<String>), AppError> {
    let mut file: Option<IncomingFile> = None;
    let mut expiry: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Failed to read multipart form: {e}")))?
    {
        let field_name = field.name().map(ToString::to_string);

        match field_name.as_deref() {
            Some("file") => {
                let name = field
                    .file_name()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                let content_type = field
                    .content_type()
                    .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(format!("Failed to read file data: {e}")))?
                    .to_vec();

                file = Some(IncomingFile {
                    name,
                    content_type,
                    data,
                });
            }
            Some("expiry") => expiry = field.text().await.ok(),
            _ => {}
        }
    }

    Ok((file, expiry))
}
