//! Query handlers for sessions.
//!
//! Each query reads a snapshot from the store and returns a read-only view.

use roleplay_core::error::DomainError;
use roleplay_core::scenario::Scenario;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::Message;
use crate::store::SessionStore;

/// Read-only view of a session's scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioView {
    /// The session identifier.
    pub session_id: Uuid,
    /// The scenario bound to the session.
    pub scenario: Scenario,
    /// Whether the scenario has been published.
    pub published: bool,
}

/// Read-only view of a session's message log.
#[derive(Debug, Serialize)]
pub struct MessagesView {
    /// Messages in append order.
    pub messages: Vec<Message>,
}

/// Retrieves a session's scenario and publish flag.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist.
pub async fn get_scenario_by_id(
    session_id: Uuid,
    store: &SessionStore,
) -> Result<ScenarioView, DomainError> {
    let session = store.get(session_id).await?;
    Ok(ScenarioView {
        session_id,
        scenario: session.scenario,
        published: session.published,
    })
}

/// Retrieves a session's message log.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist.
pub async fn get_messages_by_id(
    session_id: Uuid,
    store: &SessionStore,
) -> Result<MessagesView, DomainError> {
    let messages = store.list_messages(session_id).await?;
    Ok(MessagesView { messages })
}
