//! Command handlers for realtime sessions.
//!
//! The credential payload is owned by the realtime service; it is returned
//! exactly as received and never inspected here.

use roleplay_core::command::Command;
use roleplay_core::error::DomainError;
use roleplay_core::services::{RealtimeCredentialService, ServiceError};
use tracing::{info, warn};

use crate::domain::commands::MintRealtimeSession;
use crate::voice::voice_for_emotion;

/// Model and voice sent to the realtime service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSelection {
    /// Realtime model identifier.
    pub model: String,
    /// Voice identifier.
    pub voice: String,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolves the model and voice for a command.
///
/// An explicit voice wins; otherwise the voice comes from the emotion.
#[must_use]
pub fn select_voice(command: &MintRealtimeSession, default_model: &str) -> VoiceSelection {
    let model = present(command.model.as_deref()).unwrap_or(default_model);
    let voice = present(command.voice.as_deref())
        .unwrap_or_else(|| voice_for_emotion(present(command.emotion.as_deref())));
    VoiceSelection {
        model: model.to_owned(),
        voice: voice.to_owned(),
    }
}

/// Handles the `MintRealtimeSession` command: resolves model and voice and
/// asks the realtime service for a credential. Single attempt.
///
/// # Errors
///
/// Returns `DomainError::Upstream` if the service rejected the request, or
/// `DomainError::UpstreamUnavailable` if it could not be reached in time.
pub async fn handle_mint_realtime_session(
    command: &MintRealtimeSession,
    default_model: &str,
    service: &dyn RealtimeCredentialService,
) -> Result<serde_json::Value, DomainError> {
    let selection = select_voice(command, default_model);

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        model = %selection.model,
        voice = %selection.voice,
        "requesting realtime credential"
    );

    service
        .issue(&selection.model, &selection.voice)
        .await
        .map_err(|e| {
            warn!(
                correlation_id = %command.correlation_id(),
                error = %e,
                "realtime credential request failed"
            );
            match e {
                ServiceError::Status { status, body } => DomainError::Upstream { status, body },
                ServiceError::Transport(reason) | ServiceError::Decode(reason) => {
                    DomainError::UpstreamUnavailable(reason)
                }
            }
        })
}
