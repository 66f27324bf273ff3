//! Error types for the book search pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Coarse failure classification reported to diagnostics.
///
/// "No matches" is not a failure and has no kind; it is an empty result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The exchange with the catalog failed (transport error or non-2xx status).
    NetworkFailure,
    /// The catalog answered but the body is not the expected JSON structure.
    MalformedResponse,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkFailure => f.write_str("network failure"),
            Self::MalformedResponse => f.write_str("malformed response"),
        }
    }
}

/// Errors from a single catalog search.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SearchError {
    /// Create an unexpected status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Http(_) | Self::Status { .. } => FailureKind::NetworkFailure,
            Self::Parse(_) => FailureKind::MalformedResponse,
        }
    }

    /// Returns true if the request timed out in the transport.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
