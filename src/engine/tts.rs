//! Synthesis pipeline implementation.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::backend::{Backend, BackendError, Credentials, SynthesisRequest};
use crate::cli::AudioFormat;

/// Errors that can occur during synthesis.
#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// The service refused the request; `body` carries its error payload
    /// for verbatim display.
    #[error("HTTP request failed: {status_line}")]
    Rejected { status_line: String, body: String },

    #[error("Failed to write audio to {path}: {source}")]
    WriteFailed { path: String, source: io::Error },
}

/// Successful synthesis result.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// HTTP status line of the successful response, e.g. "200 OK".
    pub status_line: String,
    /// Raw audio bytes, opaque to this crate.
    pub audio: Vec<u8>,
}

/// The engine that drives one request through the backend and
/// classifies the response.
pub struct TtsEngine<B: Backend> {
    backend: B,
}

impl<B: Backend> TtsEngine<B> {
    /// Create a new engine.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Synthesize `text` in the given format.
    ///
    /// Credentials are read from the environment at request-build time
    /// and attached unchecked. Exactly 200 counts as success; any other
    /// status becomes [`TtsError::Rejected`] with the service's error
    /// payload, and the output file is never touched on that path.
    pub fn synthesize(&self, text: &str, format: AudioFormat) -> Result<Synthesis, TtsError> {
        let request = SynthesisRequest::new(text, format.wire_format(), Credentials::from_env());
        let response = self.backend.synthesize(&request)?;

        if !response.is_success() {
            return Err(TtsError::Rejected {
                status_line: response.status_line(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        debug!(bytes = response.body.len(), "synthesis succeeded");

        Ok(Synthesis {
            status_line: response.status_line(),
            audio: response.body,
        })
    }
}

/// Write audio bytes to `path`, creating or truncating the file.
pub fn save_audio(path: &Path, audio: &[u8]) -> Result<(), TtsError> {
    fs::write(path, audio).map_err(|source| TtsError::WriteFailed {
        path: path.display().to_string(),
        source,
    })
}
