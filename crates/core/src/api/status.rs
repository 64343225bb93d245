//! Pure functions for mapping HTTP status codes to failure kinds.

use serde::{Deserialize, Serialize};

/// The class of a failed request, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Invalid or expired token.
    Authentication,
    /// Malformed input or unknown resource rejected by the server.
    Validation,
    /// The server failed to handle an otherwise valid request.
    Server,
    /// No usable response: connection failure, timeout or unparseable body.
    Transport,
}

/// Maps a non-success HTTP status code to a [`FailureKind`].
///
/// - `401`, `403` -> `Authentication`
/// - other `4xx` -> `Validation`
/// - `5xx` -> `Server`
/// - anything else -> `Transport`
///
/// # Examples
///
/// ```
/// use uoacal_core::api::{classify_status, FailureKind};
///
/// assert_eq!(classify_status(401), FailureKind::Authentication);
/// assert_eq!(classify_status(404), FailureKind::Validation);
/// ```
pub fn classify_status(status: u16) -> FailureKind {
    match status {
        401 | 403 => FailureKind::Authentication,
        400..=499 => FailureKind::Validation,
        500..=599 => FailureKind::Server,
        _ => FailureKind::Transport,
    }
}
