//! JSON output formatting.

use crate::error::ClientError;

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a failure as a JSON object with its kind, status and message.
pub fn format_error_json(err: &ClientError) -> String {
    let message = err
        .body()
        .map(|body| body.message())
        .unwrap_or_else(|| err.to_string());
    format_json(&serde_json::json!({
        "kind": err.kind(),
        "status": err.status(),
        "error": message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RawResponse;

    #[test]
    fn test_format_error_json() {
        let err = ClientError::Authentication {
            raw: RawResponse {
                status: 401,
                body: r#"{"error":"Missing or invalid bearer token"}"#.to_string(),
            },
            body: crate::error::ErrorBody::parse(r#"{"error":"Missing or invalid bearer token"}"#),
        };
        let json: serde_json::Value = serde_json::from_str(&format_error_json(&err)).unwrap();

        assert_eq!(json["kind"], "authentication");
        assert_eq!(json["status"], 401);
        assert_eq!(json["error"], "Missing or invalid bearer token");
    }
}
