//! Error category classification

use serde::{Deserialize, Serialize};

/// Error category derived from an HTTP status code
///
/// Status `0` stands for a transport failure where no response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// No response (connection refused, DNS, timeout)
    Network,
    /// 400
    Validation,
    /// 401
    Authentication,
    /// 403
    Authorization,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 429
    RateLimited,
    /// 5xx
    Server,
    /// Any other non-success status
    Unexpected,
}

impl ErrorCategory {
    /// Determine category from an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            0 => Self::Network,
            400 => Self::Validation,
            401 => Self::Authentication,
            403 => Self::Authorization,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Unexpected,
        }
    }

    /// Whether an idempotent request may be retried as-is
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network)
    }

    /// Message shown to the user when the backend gave none
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Network => "Network error, check your connection",
            Self::Validation => "Some fields are invalid",
            Self::Authentication => "Your session has expired, please log in again",
            Self::Authorization => "You do not have permission to do this",
            Self::NotFound => "The requested resource was not found",
            Self::Conflict => "This resource already exists or was modified",
            Self::RateLimited => "Too many requests, please wait a moment",
            Self::Server => "Server error, please try again later",
            Self::Unexpected => "Unexpected response from the server",
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::RateLimited => "rate_limited",
            Self::Server => "server",
            Self::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
