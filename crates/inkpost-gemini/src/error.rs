//! Error types for the generative-text client.

/// Error from content generation operations.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// The model returned no usable text.
    #[error("empty response from model")]
    EmptyResponse,

    /// Generated content failed the minimum-length sanity check.
    #[error("generated content too short ({0} chars)")]
    ContentTooShort(usize),
}
