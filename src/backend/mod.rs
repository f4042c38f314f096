//! Backend communication with the synthesis service.
//!
//! Provides the transport trait and the HTTP implementation that talks
//! to the remote Watson text-to-speech endpoint.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{BackendError, Credentials, SynthesisRequest, SynthesisResponse};

/// Trait for synthesis service communication.
///
/// This trait abstracts the HTTP transport, allowing for mock
/// implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Execute exactly one synthesis request and return the raw response.
    ///
    /// A non-200 status is not an error at this layer; only failures to
    /// reach the service or read its response are.
    fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResponse, BackendError>;
}

/// Create the production backend.
pub fn create_backend() -> HttpBackend {
    HttpBackend::new()
}
