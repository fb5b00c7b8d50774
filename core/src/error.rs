//! Error types for the core.
//!
//! `ApiError` covers everything that can go wrong turning a response into a
//! todo list. `StorageError` is what a `KeyValueStore` reports; the theme
//! manager never propagates it, it falls back to its cached value.

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into todo items.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

/// Errors reported by a `KeyValueStore`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
