//! nexttrack error types

/// nexttrack error types
#[derive(Debug, thiserror::Error)]
pub enum NextTrackError {
    // Provider/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timed out")]
    Timeout,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl NextTrackError {
    /// Whether the remote rejected the request itself (HTTP 4xx).
    ///
    /// Lookups treat these as a definitive "not found" and cache them.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }

    /// Whether a later attempt could plausibly succeed.
    ///
    /// Covers network failures, timeouts and 5xx responses. Lookups never
    /// cache results produced by a transient error.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for NextTrackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NextTrackError::Timeout
        } else if let Some(status) = err.status() {
            NextTrackError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            NextTrackError::Http(format!("invalid response body: {err}"))
        } else {
            NextTrackError::Http(err.to_string())
        }
    }
}

/// Result type alias for nexttrack operations
pub type Result<T> = std::result::Result<T, NextTrackError>;
