//! Error types for the Branchview client

use branchview_core::selection::SelectionError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when fetching from the hosting API
///
/// Every fetch reports exactly one outcome: the decoded value or one of
/// these errors. Nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, or the status reason when the body is empty
        message: String,
    },

    /// Successful status but no response body
    #[error("Response body was empty")]
    EmptyBody,

    /// Body did not match the expected record schema
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Repository selection could not be resolved against the listing
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The fetch was cancelled before it completed
    #[error("Request cancelled")]
    Cancelled,

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }

    /// Check if the fetch was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
