//! Client error types

use std::time::Duration;

use http::StatusCode;
use shared::error::{ErrorCategory, FieldError};
use thiserror::Error;

/// Client error type
///
/// Variants follow the backend's HTTP status taxonomy; see
/// [`ClientError::category`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response arrived (connection refused, DNS failure, timeout)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// 400 with optional per-field errors
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// 401; `session_cleared` is set when the session was torn down
    #[error("Authentication required: {message}")]
    Unauthorized {
        message: String,
        session_cleared: bool,
    },

    /// 403
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 409
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 429
    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after: Option<Duration>,
    },

    /// 5xx
    #[error("Server error ({status}): {message}")]
    Server { status: StatusCode, message: String },

    /// Any other non-success status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: StatusCode, message: String },

    /// The envelope carried `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The body did not match the endpoint's contract
    #[error("Invalid response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session storage failure
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller-supplied argument rejected before sending
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// HTTP status behind this error; `0` when no response arrived
    pub fn status(&self) -> u16 {
        match self {
            Self::Network(_) => 0,
            Self::Validation { .. } => 400,
            Self::Unauthorized { .. } => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::RateLimited { .. } => 429,
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => status.as_u16(),
            // The HTTP exchange itself succeeded
            Self::Rejected(_) | Self::Decode { .. } => 200,
            Self::Serialization(_) | Self::Storage(_) | Self::Config(_) | Self::InvalidInput(_) => 0,
        }
    }

    /// Category for transport and HTTP errors; `None` for local failures
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Rejected(_)
            | Self::Decode { .. }
            | Self::Serialization(_)
            | Self::Storage(_)
            | Self::Config(_)
            | Self::InvalidInput(_) => None,
            other => Some(ErrorCategory::from_status(other.status())),
        }
    }

    /// Whether an idempotent request may be retried as-is
    pub fn is_retryable(&self) -> bool {
        self.category().is_some_and(|c| c.is_retryable())
    }

    /// Whether the caller must log in again
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized {
                session_cleared: true,
                ..
            }
        )
    }

    /// Notification-ready message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, fields } if !fields.is_empty() => {
                let details: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect();
                format!("{message} ({})", details.join(", "))
            }
            Self::Validation { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Server { message, .. }
            | Self::UnexpectedStatus { message, .. } => message.clone(),
            Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Rejected(message) => message.clone(),
            Self::Network(_) => ErrorCategory::Network.default_message().to_string(),
            Self::Decode { .. } | Self::Serialization(_) => {
                ErrorCategory::Unexpected.default_message().to_string()
            }
            Self::Storage(e) => format!("Could not access the saved session: {e}"),
            Self::Config(message) | Self::InvalidInput(message) => message.clone(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
