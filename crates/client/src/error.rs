//! Client error types.

use std::fmt;

use thiserror::Error;
use uoacal_core::api::FailureKind;

use crate::client::RawResponse;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// A parsed error body: JSON when the server sent JSON, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(serde_json::Value),
    Text(String),
}

impl ErrorBody {
    /// Parse a response body, falling back to text.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body)
            .map(ErrorBody::Json)
            .unwrap_or_else(|_| ErrorBody::Text(body.to_string()))
    }

    /// The human-readable message, preferring an `"error"` field in JSON bodies.
    pub fn message(&self) -> String {
        match self {
            ErrorBody::Json(value) => value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            ErrorBody::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Authentication failed ({}): {body}", .raw.status)]
    Authentication { raw: RawResponse, body: ErrorBody },

    #[error("Request rejected ({}): {body}", .raw.status)]
    Rejected { raw: RawResponse, body: ErrorBody },

    #[error("Server returned {}: {body}", .raw.status)]
    Server { raw: RawResponse, body: ErrorBody },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response ({}): {message}", .raw.status)]
    InvalidResponse {
        raw: RawResponse,
        body: ErrorBody,
        message: String,
    },
}

impl ClientError {
    /// Build the failure for a non-success response.
    pub(crate) fn from_status(raw: RawResponse) -> Self {
        let body = ErrorBody::parse(&raw.body);
        match uoacal_core::api::classify_status(raw.status) {
            FailureKind::Authentication => ClientError::Authentication { raw, body },
            FailureKind::Validation => ClientError::Rejected { raw, body },
            FailureKind::Server => ClientError::Server { raw, body },
            FailureKind::Transport => ClientError::InvalidResponse {
                message: format!("unexpected status: {body}"),
                raw,
                body,
            },
        }
    }

    /// The failure class of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Authentication { .. } => FailureKind::Authentication,
            ClientError::Rejected { .. } => FailureKind::Validation,
            ClientError::Server { .. } => FailureKind::Server,
            ClientError::Request(_) | ClientError::InvalidResponse { .. } => FailureKind::Transport,
        }
    }

    /// The raw response, if the server answered at all.
    pub fn raw(&self) -> Option<&RawResponse> {
        match self {
            ClientError::Authentication { raw, .. }
            | ClientError::Rejected { raw, .. }
            | ClientError::Server { raw, .. }
            | ClientError::InvalidResponse { raw, .. } => Some(raw),
            ClientError::Request(_) => None,
        }
    }

    /// The parsed error body sent by the server.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ClientError::Authentication { body, .. }
            | ClientError::Rejected { body, .. }
            | ClientError::Server { body, .. }
            | ClientError::InvalidResponse { body, .. } => Some(body),
            ClientError::Request(_) => None,
        }
    }

    /// The HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        self.raw()
            .map(|raw| raw.status)
            .or_else(|| match self {
                ClientError::Request(e) => e.status().map(|s| s.as_u16()),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_error_body_prefers_error_field() {
        let body = ErrorBody::parse(r#"{"error":"Calendar not found: 9"}"#);
        assert_eq!(body.message(), "Calendar not found: 9");
    }

    #[test]
    fn test_error_body_falls_back_to_text() {
        let body = ErrorBody::parse("<html>bad gateway</html>");
        assert_eq!(body, ErrorBody::Text("<html>bad gateway</html>".to_string()));
    }

    #[test]
    fn test_from_status_classification() {
        assert_eq!(
            ClientError::from_status(raw(401, "")).kind(),
            FailureKind::Authentication
        );
        assert_eq!(
            ClientError::from_status(raw(404, "")).kind(),
            FailureKind::Validation
        );
        assert_eq!(
            ClientError::from_status(raw(502, "")).kind(),
            FailureKind::Server
        );
        assert_eq!(
            ClientError::from_status(raw(304, "")).kind(),
            FailureKind::Transport
        );
    }

    #[test]
    fn test_unexpected_status_keeps_parsed_body() {
        let err = ClientError::from_status(raw(302, r#"{"error":"moved"}"#));

        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(
            err.body(),
            Some(&ErrorBody::Json(serde_json::json!({ "error": "moved" })))
        );
        assert_eq!(err.to_string(), "Invalid response (302): unexpected status: moved");
    }

    #[test]
    fn test_accessors_expose_raw_response() {
        let err = ClientError::from_status(raw(400, r#"{"error":"Calendar name cannot be empty"}"#));

        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.body().map(ErrorBody::message).as_deref(),
            Some("Calendar name cannot be empty")
        );
        assert_eq!(
            err.to_string(),
            "Request rejected (400): Calendar name cannot be empty"
        );
    }
}
