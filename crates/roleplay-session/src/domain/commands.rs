//! Commands for sessions.

use roleplay_core::command::Command;
use roleplay_core::scenario::Scenario;
use uuid::Uuid;

/// Command to open a session for a freshly generated scenario.
#[derive(Debug, Clone)]
pub struct CreateSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The scenario to bind to the new session.
    pub scenario: Scenario,
    /// Emotion the scenario was generated for.
    pub emotion: String,
}

impl Command for CreateSession {
    fn command_type(&self) -> &'static str {
        "session.create"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to publish a session's scenario.
#[derive(Debug, Clone)]
pub struct PublishScenario {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to publish.
    pub session_id: Uuid,
}

impl Command for PublishScenario {
    fn command_type(&self) -> &'static str {
        "session.publish_scenario"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
