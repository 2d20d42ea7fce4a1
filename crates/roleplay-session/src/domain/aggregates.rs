//! Session records.

use chrono::{DateTime, Utc};
use roleplay_core::scenario::Scenario;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in a session's message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced the message (e.g. "trainee", "assistant").
    pub role: String,
    /// Message text.
    pub content: String,
    /// When the message was recorded.
    pub sent_at: DateTime<Utc>,
}

/// A scenario bound to an identifier, a publish flag and a message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session identifier.
    pub id: Uuid,
    /// The scenario this session rehearses. Never modified after creation.
    pub scenario: Scenario,
    /// Emotion the scenario was generated for.
    pub emotion: String,
    /// Whether the scenario has been published.
    pub published: bool,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    messages: Vec<Message>,
}

impl Session {
    /// Creates an unpublished session with an empty message log.
    #[must_use]
    pub fn new(id: Uuid, scenario: Scenario, emotion: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            scenario,
            emotion,
            published: false,
            created_at,
            messages: Vec::new(),
        }
    }

    /// Marks the scenario as published. Repeating this has no further effect.
    pub fn publish(&mut self) {
        self.published = true;
    }

    /// Appends a message to the log.
    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns the message log in append order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
