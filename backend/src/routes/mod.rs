mod docs;
pub mod file;
mod health;
pub mod upload;

use aide::axum::{routing::get, ApiRouter};

/// Expiry applied when the caller omits the `expiry` field or sends one
/// that does not parse
pub(crate) const DEFAULT_EXPIRY_SECS: u64 = 3600;

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/file/{id}", get(file::resolve_file))
        // Multipart bodies carry no JSON schema; the upload route is
        // mounted outside the documented API surface
        .route("/upload", axum::routing::post(upload::upload_file))
}

/// Parses a caller-supplied expiry in seconds.
///
/// Absence, a parse failure, and zero all fall back silently to
/// [`DEFAULT_EXPIRY_SECS`]; a malformed expiry is not an error.
pub(crate) fn parse_expiry_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_EXPIRY_SECS)
}
