//! Fallback scenario templates.
//!
//! The built-in content is a Guest/Staff complaint exercise. Deployments can
//! replace it wholesale with a YAML document of the same shape.

use roleplay_core::scenario::{DialogueLine, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed scenario content used when generation cannot supply its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTemplate {
    /// Text placed in front of the overview body.
    #[serde(default)]
    pub overview_prefix: String,
    /// Roles to present.
    pub roles: Vec<Role>,
    /// Scripted opening exchange.
    pub opening_dialogue: Vec<DialogueLine>,
    /// Learning goals.
    pub learning_goals: Vec<String>,
}

impl ScenarioTemplate {
    fn is_complete(&self) -> bool {
        !self.roles.is_empty()
            && !self.opening_dialogue.is_empty()
            && !self.learning_goals.is_empty()
    }
}

/// Templates for the two fallback tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackTemplates {
    /// Used when the service answered but its text was not a valid scenario.
    pub raw_text: ScenarioTemplate,
    /// Used when the service could not be reached at all.
    pub local: ScenarioTemplate,
}

/// A template document that cannot be used.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The document is not valid YAML of the expected shape.
    #[error("invalid template document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A tier template has an empty list, which would yield a malformed scenario.
    #[error("template `{0}` must define at least one role, dialogue line and learning goal")]
    Incomplete(&'static str),
}

impl FallbackTemplates {
    /// Parses templates from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Parse` if the document does not match the
    /// template shape, or `TemplateError::Incomplete` if either tier has an
    /// empty list.
    pub fn from_yaml_str(document: &str) -> Result<Self, TemplateError> {
        let templates: Self = serde_yaml::from_str(document)?;
        if !templates.raw_text.is_complete() {
            return Err(TemplateError::Incomplete("raw_text"));
        }
        if !templates.local.is_complete() {
            return Err(TemplateError::Incomplete("local"));
        }
        Ok(templates)
    }
}

impl Default for FallbackTemplates {
    fn default() -> Self {
        Self {
            raw_text: ScenarioTemplate {
                overview_prefix: String::new(),
                roles: vec![
                    Role::new(
                        "Guest",
                        "Express frustration and be specific about the issue.",
                    ),
                    Role::new(
                        "Staff",
                        "Listen, empathize, and offer a quick resolution.",
                    ),
                ],
                opening_dialogue: vec![
                    DialogueLine::new(
                        "Guest",
                        "I've been waiting 20 minutes and my order is wrong!",
                    ),
                    DialogueLine::new("Staff", "I'm very sorry — let me fix that immediately."),
                ],
                learning_goals: vec![
                    "Empathy".to_owned(),
                    "Ownership".to_owned(),
                    "Resolution".to_owned(),
                ],
            },
            local: ScenarioTemplate {
                overview_prefix: "Generated locally: ".to_owned(),
                roles: vec![Role::named("Guest"), Role::named("Staff")],
                opening_dialogue: vec![
                    DialogueLine::new("Guest", "I'm upset."),
                    DialogueLine::new("Staff", "I'm sorry."),
                ],
                learning_goals: vec!["Empathy".to_owned(), "Resolution".to_owned()],
            },
        }
    }
}
