//! Error types for the `dns-hosting-api` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, DnsHostingError>`.
//!
//! [`DnsHostingError`] keeps the two request failure kinds apart:
//! - **API errors** — the server answered with a JSON payload carrying a `message` key
//! - **Transport errors** — the request could not be completed (network, DNS, TLS)
//!
//! plus response decoding, argument, and construction failures.

use std::fmt;

use serde_json::Value;

/// Error payload returned by the DNS hosting API.
///
/// The API signals failure solely by including a `message` key in the
/// response object; the HTTP status code is not consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorBody {
    /// The `code` field, passed through as sent (usually a number).
    pub code: Option<Value>,
    /// The `message` field.
    pub message: String,
    /// The full error payload.
    pub raw: Value,
}

impl ApiErrorBody {
    /// Build an error body from a parsed payload, if it carries a non-null
    /// `message` key.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let message = payload.get("message").filter(|m| !m.is_null())?;
        let message = match message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Some(Self {
            code: payload.get("code").cloned(),
            message,
            raw: payload.clone(),
        })
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.message),
            None => write!(f, "[UNKNOWN] {}", self.message),
        }
    }
}

/// All possible errors produced by the DNS hosting client.
#[derive(Debug, thiserror::Error)]
pub enum DnsHostingError {
    /// An error payload returned by the API.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The HTTP request itself could not be completed.
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("response is not valid JSON: {body}")]
    InvalidResponse {
        /// The raw response body.
        body: String,
    },

    /// Failed to serialize a request body.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The zone text payload was not valid base64.
    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The payload did not have the shape the operation expects.
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No HTTP client could be constructed.
    #[error("HTTP client unavailable: {0}")]
    DependencyMissing(String),
}

impl DnsHostingError {
    /// Whether this is an API error payload (as opposed to any local or
    /// transport failure).
    pub fn is_api(&self) -> bool {
        matches!(self, DnsHostingError::Api(_))
    }

    /// Whether the request could not be completed at the transport level.
    pub fn is_transport(&self) -> bool {
        matches!(self, DnsHostingError::Transport(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DnsHostingError>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_without_message_is_not_an_error() {
        assert!(ApiErrorBody::from_payload(&json!({"total_count": 2, "list": []})).is_none());
        assert!(ApiErrorBody::from_payload(&json!("c29h")).is_none());
    }

    #[test]
    fn null_message_is_not_an_error() {
        let payload = json!({"list": [1], "message": null});
        assert!(ApiErrorBody::from_payload(&payload).is_none());
    }

    #[test]
    fn error_body_keeps_code_and_payload() {
        let payload = json!({"code": 404, "message": "not found"});
        let body = ApiErrorBody::from_payload(&payload).unwrap();
        assert_eq!(body.code, Some(json!(404)));
        assert_eq!(body.message, "not found");
        assert_eq!(body.raw, payload);
        assert_eq!(body.to_string(), "[404] not found");
    }

    #[test]
    fn missing_code_displays_unknown() {
        let body = ApiErrorBody::from_payload(&json!({"message": "denied"})).unwrap();
        assert_eq!(body.code, None);
        assert_eq!(body.to_string(), "[UNKNOWN] denied");
    }
}
