//! Capability traits for the external services.
//!
//! The generator and the credential broker only ever see these traits, so
//! both can be exercised against in-process fakes.

use async_trait::async_trait;
use thiserror::Error;

/// Failure talking to an external service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (connect error, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The response could not be decoded into the expected envelope.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// A single text completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Instruction fixing the assistant's behaviour and output shape.
    pub system_instruction: String,
    /// The user turn.
    pub user_instruction: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
}

/// A generative text completion service.
#[async_trait]
pub trait GenerativeTextService: Send + Sync {
    /// Runs one completion and returns the generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;
}

/// A realtime ephemeral-credential issuance service.
#[async_trait]
pub trait RealtimeCredentialService: Send + Sync {
    /// Issues a short-lived credential for the given model and voice.
    ///
    /// The payload is returned exactly as the service produced it.
    async fn issue(&self, model: &str, voice: &str) -> Result<serde_json::Value, ServiceError>;
}
