//! HTTP error taxonomy shared by the client and its callers
//!
//! The backend reports failures through HTTP status codes plus an optional
//! JSON body. [`ErrorCategory`] classifies the status; [`ErrorBody`] is the
//! body shape, including per-field validation errors.

mod category;

pub use category::ErrorCategory;

use serde::{Deserialize, Serialize};

/// A single field-level validation failure reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name (`field`, `param` and `path` are all accepted on the wire)
    #[serde(alias = "param", alias = "path")]
    pub field: String,
    /// Human-readable message (`msg` is accepted on the wire)
    #[serde(alias = "msg")]
    pub message: String,
}

/// Error response body
///
/// The backend is inconsistent about where the human message lives, so both
/// `message` and `error` are read; `message` wins when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    /// Parse an error body, falling back to treating the raw text as the message
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(text) {
            Ok(body) => body,
            Err(_) => {
                let trimmed = text.trim();
                Self {
                    message: (!trimmed.is_empty()).then(|| trimmed.to_string()),
                    ..Self::default()
                }
            }
        }
    }

    /// The best available message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_prefers_message() {
        let body = ErrorBody::parse(r#"{"message":"Stock insuffisant","error":"ignored"}"#);
        assert_eq!(body.message(), Some("Stock insuffisant"));
    }

    #[test]
    fn test_error_body_reads_error_field() {
        let body = ErrorBody::parse(r#"{"success":false,"error":"Token invalide"}"#);
        assert_eq!(body.message(), Some("Token invalide"));
    }

    #[test]
    fn test_error_body_field_aliases() {
        let body = ErrorBody::parse(
            r#"{"errors":[{"param":"email","msg":"Email invalide"},{"path":"price","message":"must be > 0"}]}"#,
        );
        assert_eq!(
            body.errors,
            vec![
                FieldError {
                    field: "email".into(),
                    message: "Email invalide".into()
                },
                FieldError {
                    field: "price".into(),
                    message: "must be > 0".into()
                },
            ]
        );
    }

    #[test]
    fn test_error_body_plain_text() {
        let body = ErrorBody::parse("Bad Gateway\n");
        assert_eq!(body.message(), Some("Bad Gateway"));
        assert!(ErrorBody::parse("").message().is_none());
    }
}
