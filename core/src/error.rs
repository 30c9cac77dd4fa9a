//! Error types for the to-do API client.
//!
//! # Design
//! The server answers 404 with an empty body whenever an id does not exist,
//! so `NotFound` carries nothing. Any other unexpected status keeps the raw
//! code and body in `HttpError`.

use thiserror::Error;

/// Errors returned by `ToDoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
