//! Commands for realtime sessions.

use roleplay_core::command::Command;
use uuid::Uuid;

/// Command to mint a short-lived realtime credential.
///
/// Blank strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct MintRealtimeSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Realtime model; the configured default when absent.
    pub model: Option<String>,
    /// Emotion used to pick a voice when `voice` is absent.
    pub emotion: Option<String>,
    /// Explicit voice, overriding `emotion`.
    pub voice: Option<String>,
}

impl Command for MintRealtimeSession {
    fn command_type(&self) -> &'static str {
        "realtime.mint_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
