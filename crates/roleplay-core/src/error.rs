//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Scenario generation never produces one of these: its failures are
/// absorbed into a fallback scenario.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No session exists under the given identifier.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// The realtime service answered with a non-success status.
    #[error("realtime sessions request failed: {status} {body}")]
    Upstream {
        /// HTTP status returned by the upstream service.
        status: u16,
        /// Response body text returned by the upstream service.
        body: String,
    },

    /// The realtime service could not be reached or timed out.
    #[error("realtime sessions request failed: {0}")]
    UpstreamUnavailable(String),
}
