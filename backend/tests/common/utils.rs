use axum::response::Response;
use http_body_util::BodyExt;
use rand::RngCore;

/// Boundary used by `build_multipart_body`
pub const TEST_BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Builds a multipart/form-data body with an optional file part
/// (`filename`, `content_type`, `data`) under the field name `file`, plus
/// any number of plain text fields
pub fn build_multipart_body(
    file: Option<(&str, &str, &[u8])>,
    text_fields: &[(&str, &str)],
) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some((filename, content_type, data)) = file {
        body.extend_from_slice(format!("--{TEST_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    for (name, value) in text_fields {
        body.extend_from_slice(format!("--{TEST_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{TEST_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Generate a random file payload of the given size
pub fn generate_test_file(size: usize) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    rand::rngs::OsRng.fill_bytes(&mut buf);
    buf
}

/// Unique file name for tests that must not collide across runs
pub fn unique_file_name(extension: &str) -> String {
    format!("test-{}.{extension}", uuid::Uuid::new_v4().simple())
}
