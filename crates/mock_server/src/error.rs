use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use uoacal_core::calendar::{CalendarError, EventError, RangeError};

/// Errors returned by the mock API, rendered as `{"error": "..."}` JSON bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing or invalid bearer token")]
    Unauthorized,
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: u64 },
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn calendar_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Calendar",
            id,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CalendarError> for ApiError {
    fn from(err: CalendarError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<RangeError> for ApiError {
    fn from(err: RangeError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        tracing::warn!(status = %status, message = %message, "API error");
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::calendar_not_found(3).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(EventError::InvalidTimeRange).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            ApiError::calendar_not_found(3).to_string(),
            "Calendar not found: 3"
        );
    }
}
