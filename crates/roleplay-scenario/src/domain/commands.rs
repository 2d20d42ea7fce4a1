//! Commands for scenario generation.

use roleplay_core::command::Command;
use uuid::Uuid;

/// Command to generate a new training scenario.
#[derive(Debug, Clone)]
pub struct GenerateScenario {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Free-text description of the situation to rehearse.
    pub prompt: String,
    /// Emotion the counterpart should display.
    pub emotion: String,
    /// Title to use when the generated output cannot supply one.
    pub title: Option<String>,
}

impl Command for GenerateScenario {
    fn command_type(&self) -> &'static str {
        "scenario.generate"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
