//! Error types for realty-core.
//!
//! Every failure a panel operation can run into ends up as an [`ApiError`];
//! the panel turns it into a single user-facing notification.

use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::api::ApiClient) calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, CORS, ...)
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// 2xx status but the body did not carry `success: true`
    #[error("{}", .message.as_deref().unwrap_or("operation was not successful"))]
    Rejected { message: Option<String> },
    /// The body could not be decoded into the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Error text supplied by the server, if any.
    ///
    /// Only status and rejection errors can carry one; transport and decoding
    /// failures never reached a well-formed server answer.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// True when the request never got an HTTP answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Errors raised while turning form input into a request body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A numeric field did not parse to a finite number
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
}
