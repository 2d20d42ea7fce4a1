//! In-process session store.
//!
//! One `SessionStore` is built at startup and shared through application
//! state. Every operation takes the lock once and releases it before
//! returning; callers never hold it across an outbound call.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, Utc};
use roleplay_core::error::DomainError;
use roleplay_core::scenario::Scenario;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::aggregates::{Message, Session};

/// Keyed table of all sessions in this process.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new session and returns its identifier.
    ///
    /// The identifier is a fresh random UUID, claimed through a vacant entry
    /// under the write lock so an existing session is never overwritten.
    pub async fn create(
        &self,
        scenario: Scenario,
        emotion: String,
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let mut sessions = self.sessions.write().await;
        loop {
            let id = Uuid::new_v4();
            if let Entry::Vacant(slot) = sessions.entry(id) {
                slot.insert(Session::new(id, scenario, emotion, created_at));
                return id;
            }
        }
    }

    /// Returns a snapshot of the session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has this id.
    pub async fn get(&self, id: Uuid) -> Result<Session, DomainError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Marks the session's scenario as published.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has this id.
    pub async fn publish(&self, id: Uuid) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .get_mut(&id)
            .map(Session::publish)
            .ok_or_else(|| not_found(id))
    }

    /// Returns a snapshot of the session's message log.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has this id.
    pub async fn list_messages(&self, id: Uuid) -> Result<Vec<Message>, DomainError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|session| session.messages().to_vec())
            .ok_or_else(|| not_found(id))
    }

    /// Appends a message to the session's log.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has this id.
    pub async fn append_message(&self, id: Uuid, message: Message) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .get_mut(&id)
            .map(|session| session.append_message(message))
            .ok_or_else(|| not_found(id))
    }

    /// Number of sessions created in this process.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no session has been created yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::SessionNotFound(id.to_string())
}
