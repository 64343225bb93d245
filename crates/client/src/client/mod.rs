//! HTTP client for the calendar API.

pub mod calendars;
pub mod continuation;
pub mod events;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ErrorBody, Result};

/// Status and body text of a server response, kept for the caller as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A successful outcome: the raw response plus its parsed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub raw: RawResponse,
    pub data: T,
}

/// HTTP client for the calendar API.
///
/// Holds no mutable state: the token and base URL are fixed at construction,
/// so a single client can be cloned and shared across concurrent calls.
/// To rotate the token, build a new client.
#[derive(Debug, Clone)]
pub struct CalendarClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl CalendarClient {
    /// Create a new client. Performs no network I/O.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Start a request with the bearer token attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "Sending request");
        self.client
            .request(method, self.url(path))
            .bearer_auth(self.config.api_token.expose())
    }

    /// Send a request and capture its status and body.
    async fn send(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let response = builder.send().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Request failed before a response arrived");
        })?;
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Ok(RawResponse { status, body }),
            Err(e) => {
                tracing::warn!(status, error = %e, "Failed to read response body");
                Err(ClientError::InvalidResponse {
                    raw: RawResponse {
                        status,
                        body: String::new(),
                    },
                    body: ErrorBody::Text(String::new()),
                    message: format!("failed to read body: {e}"),
                })
            }
        }
    }

    /// Turn a raw response into a parsed reply or a classified failure.
    fn handle_response<T: DeserializeOwned>(&self, raw: RawResponse) -> Result<Reply<T>> {
        if !raw.is_success() {
            let err = ClientError::from_status(raw);
            tracing::warn!(error = %err, "Server rejected request");
            return Err(err);
        }
        match serde_json::from_str(&raw.body) {
            Ok(data) => Ok(Reply { raw, data }),
            Err(e) => Err(ClientError::InvalidResponse {
                body: ErrorBody::parse(&raw.body),
                raw,
                message: e.to_string(),
            }),
        }
    }

    /// Handle delete responses (no body expected).
    fn handle_delete_response(&self, raw: RawResponse) -> Result<Reply<()>> {
        if raw.is_success() {
            Ok(Reply { raw, data: () })
        } else {
            let err = ClientError::from_status(raw);
            tracing::warn!(error = %err, "Server rejected delete");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uoacal_core::api::FailureKind;

    fn client() -> CalendarClient {
        CalendarClient::new(ClientConfig::new("t").with_base_url("http://cal.test"))
    }

    #[test]
    fn test_url() {
        assert_eq!(
            client().url("/api/calendars"),
            "http://cal.test/api/calendars"
        );
    }

    #[test]
    fn test_request_carries_bearer_header() {
        let request = client()
            .request(Method::GET, "/api/calendars")
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer t"
        );
        assert_eq!(request.url().as_str(), "http://cal.test/api/calendars");
    }

    #[test]
    fn test_handle_response_parses_success() {
        let raw = RawResponse {
            status: 201,
            body: r#"{"id":1,"name":"test"}"#.to_string(),
        };
        let reply: Reply<serde_json::Value> = client().handle_response(raw.clone()).unwrap();

        assert_eq!(reply.raw, raw);
        assert_eq!(reply.data["name"], "test");
    }

    #[test]
    fn test_handle_response_unparseable_success_is_transport() {
        let raw = RawResponse {
            status: 200,
            body: "<html>proxy page</html>".to_string(),
        };
        let err = client()
            .handle_response::<serde_json::Value>(raw)
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(err.status(), Some(200));
        assert_eq!(
            err.body(),
            Some(&ErrorBody::Text("<html>proxy page</html>".to_string()))
        );
    }

    #[tokio::test]
    async fn test_truncated_body_keeps_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let client =
            CalendarClient::new(ClientConfig::new("t").with_base_url(format!("http://{addr}")));
        let err = client
            .send(client.request(Method::GET, "/api/calendars"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(err.status(), Some(200));
        server.await.unwrap();
    }

    #[test]
    fn test_handle_delete_response() {
        let ok = RawResponse {
            status: 204,
            body: String::new(),
        };
        assert!(client().handle_delete_response(ok).is_ok());

        let missing = RawResponse {
            status: 404,
            body: r#"{"error":"Event not found: 3"}"#.to_string(),
        };
        let err = client().handle_delete_response(missing).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Validation);
    }
}
