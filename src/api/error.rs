//! Error taxonomy for the remote API boundary.

use thiserror::Error;

/// Errors that can occur when calling the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested record does not exist (404).
    #[error("Record not found")]
    NotFound,

    /// The request conflicts with existing data, e.g. a duplicate (409).
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The session is no longer valid (401/403).
    #[error("Not authorized")]
    Unauthorized,

    /// Any other non-success response from the server.
    #[error("Server error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Failed to reach the server at all.
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status with its body text.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => ApiError::NotFound,
            409 => ApiError::Conflict { message },
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Upstream { status, message },
        }
    }

    /// The human-readable message stored on a request status and rendered
    /// next to the failed control.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound => "The requested record could not be found.".to_string(),
            ApiError::Conflict { message } if !message.is_empty() => {
                format!("Already exists: {message}")
            }
            ApiError::Conflict { .. } => "A matching record already exists.".to_string(),
            ApiError::Unauthorized => "Your session has expired. Sign in again.".to_string(),
            ApiError::Upstream { .. } | ApiError::Decode(_) => {
                "Something went wrong. Try again.".to_string()
            }
            ApiError::Network { .. } => {
                "Could not reach the server. Check your connection.".to_string()
            }
        }
    }
}
