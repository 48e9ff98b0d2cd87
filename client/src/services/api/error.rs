//! Transport-level errors from the backend API.
//!
//! These stay inside the service layer; controllers translate them into
//! [`crate::core::AppError`] with the context of the call that failed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response within the request timeout
    #[error("request timed out")]
    Timeout,

    /// Connection refused, DNS failure, TLS error, ...
    #[error("server unreachable: {0}")]
    Transport(String),

    /// The backend answered but refused the request (`success: false` or non-2xx)
    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The backend answered 2xx with a body we could not understand
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message, if the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
