//! Scenario data model shared by the generator, the session store and the API.

use serde::{Deserialize, Serialize};

/// A participant in a roleplay scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Display name of the role (e.g. "Guest").
    pub name: String,
    /// Optional guidance for whoever plays this role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Role {
    /// Creates a role with instructions.
    #[must_use]
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: Some(instructions.into()),
        }
    }

    /// Creates a role without instructions.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: None,
        }
    }
}

/// One line of the scripted opening exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Name of the role speaking.
    pub speaker: String,
    /// What the speaker says.
    pub line: String,
}

impl DialogueLine {
    /// Creates a dialogue line.
    #[must_use]
    pub fn new(speaker: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            line: line.into(),
        }
    }
}

/// Structured training content consumed by the roleplay client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short scenario title.
    pub title: String,
    /// Descriptive overview of the situation.
    pub overview: String,
    /// Participating roles, in presentation order.
    pub roles: Vec<Role>,
    /// Scripted opening exchange.
    pub opening_dialogue: Vec<DialogueLine>,
    /// What the trainee should practise.
    pub learning_goals: Vec<String>,
}

impl Scenario {
    /// Returns `true` when every list is populated and the title is not blank.
    ///
    /// Scenarios handed to the session store always satisfy this.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.roles.is_empty()
            && !self.opening_dialogue.is_empty()
            && !self.learning_goals.is_empty()
    }
}
