//! HTTP client for the synthesis service.

use reqwest::header::ACCEPT;
use tracing::debug;

use super::Backend;
use super::types::{BackendError, SynthesisRequest, SynthesisResponse};

/// Fixed synthesis endpoint; the voice is part of the service contract
/// and not user-configurable.
const ENDPOINT: &str =
    "https://stream.watsonplatform.net/text-to-speech/api/v1/synthesize?voice=en-US_AllisonVoice";

/// HTTP-based backend client.
pub struct HttpBackend {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a client pointed at the production endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    /// Create a client pointed at a different endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the endpoint URL for this backend.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for HttpBackend {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResponse, BackendError> {
        debug!(
            endpoint = %self.endpoint,
            accept = %request.accept(),
            "sending synthesis request"
        );

        // Single blocking attempt, no retry, client-default timeout.
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, request.accept())
            .basic_auth(
                &request.credentials.username,
                Some(&request.credentials.password),
            )
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, "synthesis response received");

        let body = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(SynthesisResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Credentials;
    use mockito::Matcher;

    fn test_request() -> SynthesisRequest {
        SynthesisRequest::new(
            "Hello world",
            "flac",
            Credentials {
                username: "user".to_string(),
                password: "pass".to_string(),
            },
        )
    }

    fn backend_for(server: &mockito::ServerGuard) -> HttpBackend {
        HttpBackend::with_endpoint(format!(
            "{}/text-to-speech/api/v1/synthesize?voice=en-US_AllisonVoice",
            server.url()
        ))
    }

    #[test]
    fn test_synthesize_sends_negotiated_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/text-to-speech/api/v1/synthesize")
            .match_query(Matcher::UrlEncoded(
                "voice".into(),
                "en-US_AllisonVoice".into(),
            ))
            .match_header("content-type", "application/json")
            .match_header("accept", "audio/flac")
            // base64("user:pass")
            .match_header("authorization", "Basic dXNlcjpwYXNz")
            .match_body(Matcher::Json(serde_json::json!({ "text": "Hello world" })))
            .with_status(200)
            .with_body(b"fLaC fake audio bytes")
            .create();

        let backend = backend_for(&server);
        let response = backend.synthesize(&test_request()).unwrap();

        mock.assert();
        assert!(response.is_success());
        assert_eq!(response.body, b"fLaC fake audio bytes");
    }

    #[test]
    fn test_synthesize_returns_rejection_body_raw() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/text-to-speech/api/v1/synthesize")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":"unauthorized"}"#)
            .create();

        let backend = backend_for(&server);
        let response = backend.synthesize(&test_request()).unwrap();

        mock.assert();
        assert_eq!(response.status.as_u16(), 401);
        assert_eq!(response.body, br#"{"error":"unauthorized"}"#);
    }

    #[test]
    fn test_synthesize_connection_failure() {
        // Nothing listens on port 1.
        let backend = HttpBackend::with_endpoint("http://127.0.0.1:1/synthesize");
        let result = backend.synthesize(&test_request());

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            BackendError::ConnectionFailed(_)
        ));
    }
}
