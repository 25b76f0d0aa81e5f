//! Error types for the Blogger client.

/// Error from Blogger API operations.
#[derive(Debug, thiserror::Error)]
pub enum BloggerError {
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

    /// Token refresh succeeded at the HTTP level but returned no token.
    #[error("token refresh returned no access token")]
    MissingAccessToken,
}

impl BloggerError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Client errors (4xx) are permanent: bad credentials or a bad payload
    /// will not fix themselves on the next attempt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpResponse { status, .. } => *status >= 500,
            Self::HttpRequest(_) => true,
            Self::Json(_) | Self::MissingAccessToken => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_not_retryable() {
        let err = BloggerError::HttpResponse {
            status: 401,
            body: "unauthorized".to_owned(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_server_errors_retryable() {
        let err = BloggerError::HttpResponse {
            status: 503,
            body: "unavailable".to_owned(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_missing_token_not_retryable() {
        assert!(!BloggerError::MissingAccessToken.is_retryable());
    }
}
