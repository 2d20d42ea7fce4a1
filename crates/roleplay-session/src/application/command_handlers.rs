//! Command handlers for sessions.

use roleplay_core::clock::Clock;
use roleplay_core::command::Command;
use roleplay_core::error::DomainError;
use tracing::info;
use uuid::Uuid;

use crate::domain::commands::{CreateSession, PublishScenario};
use crate::store::SessionStore;

/// Result of a successfully handled `CreateSession` command.
#[derive(Debug)]
pub struct SessionCreated {
    /// The identifier of the new session.
    pub session_id: Uuid,
}

/// Handles the `CreateSession` command: inserts the scenario under a fresh
/// identifier. The scenario is complete before this runs, so the insert is
/// the only state change.
pub async fn handle_create_session(
    command: CreateSession,
    clock: &dyn Clock,
    store: &SessionStore,
) -> SessionCreated {
    let command_type = command.command_type();
    let correlation_id = command.correlation_id();

    let session_id = store
        .create(command.scenario, command.emotion, clock.now())
        .await;

    info!(command_type, %correlation_id, %session_id, "session created");

    SessionCreated { session_id }
}

/// Handles the `PublishScenario` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist.
pub async fn handle_publish_scenario(
    command: &PublishScenario,
    store: &SessionStore,
) -> Result<(), DomainError> {
    store.publish(command.session_id).await?;

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        session_id = %command.session_id,
        "scenario published"
    );

    Ok(())
}
