//! Backend request/response types.

use std::env;

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when communicating with the synthesis service.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Basic Auth credentials for the synthesis service.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Read credentials from `TTS_USERNAME` / `TTS_PASSWORD`.
    ///
    /// Missing variables become empty strings and are passed through
    /// unchecked; the service answers bad credentials with a 401, which
    /// the caller surfaces verbatim.
    pub fn from_env() -> Self {
        Self {
            username: env::var("TTS_USERNAME").unwrap_or_default(),
            password: env::var("TTS_PASSWORD").unwrap_or_default(),
        }
    }
}

/// Request for speech synthesis.
///
/// Only `text` is serialized into the JSON body; the format and
/// credentials travel as the `Accept` and `Authorization` headers.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub text: String,

    /// Negotiated wire format, e.g. "ogg;codecs=opus".
    #[serde(skip)]
    pub format: String,

    #[serde(skip)]
    pub credentials: Credentials,
}

impl SynthesisRequest {
    /// Create a new synthesis request.
    pub fn new(
        text: impl Into<String>,
        format: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            text: text.into(),
            format: format.into(),
            credentials,
        }
    }

    /// Value for the `Accept` header.
    pub fn accept(&self) -> String {
        format!("audio/{}", self.format)
    }
}

/// Raw response from the synthesis endpoint.
///
/// The transport never classifies the status; callers decide what a
/// non-200 means.
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl SynthesisResponse {
    /// True only for "200 OK".
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// HTTP status line, e.g. "200 OK".
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }
}
