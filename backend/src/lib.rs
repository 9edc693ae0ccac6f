//! File Share Backend service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// S3-backed file storage operations
pub mod file_storage;

/// Route handlers
pub mod routes;

/// HTTP server bootstrap
pub mod server;

/// Configuration and error handling
pub mod types;
