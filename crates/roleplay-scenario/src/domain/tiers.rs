//! Generation tiers and the combinator that walks them.
//!
//! Each tier is a plain function returning `Result<Scenario,
//! GenerationDegraded>`. [`resolve`] takes the primary outcome, tries each
//! fallible tier in order, and ends with [`local_scenario`], which cannot fail.

use std::fmt;

use roleplay_core::scenario::Scenario;

use super::commands::GenerateScenario;
use super::templates::{FallbackTemplates, ScenarioTemplate};

/// Characters of the prompt used as a fallback title.
pub const TITLE_PREFIX_CHARS: usize = 48;

/// Characters of the raw model output kept in a fallback overview.
pub const OVERVIEW_PREFIX_CHARS: usize = 800;

const UNTITLED: &str = "Untitled scenario";

/// Why a tier could not produce a scenario. Never leaves this crate's API
/// boundary as an error; it only selects the next tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationDegraded {
    /// The text service could not be called successfully.
    ServiceFailed(String),
    /// The service answered, but not with a valid scenario.
    MalformedOutput {
        /// The text the service returned.
        raw: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for GenerationDegraded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceFailed(reason) => write!(f, "service failed: {reason}"),
            Self::MalformedOutput { reason, .. } => write!(f, "malformed output: {reason}"),
        }
    }
}

/// Which tier produced a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioSource {
    /// Parsed from the service's structured output.
    Generated,
    /// Built around the service's unstructured text.
    RawText,
    /// Built from the request alone.
    Local,
}

/// A fallible fallback tier.
type Tier = fn(
    &GenerateScenario,
    &FallbackTemplates,
    GenerationDegraded,
) -> Result<Scenario, GenerationDegraded>;

/// Fallible fallback tiers, in the order they are tried.
const FALLBACK_TIERS: [(ScenarioSource, Tier); 1] =
    [(ScenarioSource::RawText, raw_text_scenario as Tier)];

/// Parses service output as a scenario.
///
/// # Errors
///
/// Returns `GenerationDegraded::MalformedOutput` if the text is not JSON of
/// the scenario shape or the parsed scenario is not well formed.
pub fn parse_scenario(raw: String) -> Result<Scenario, GenerationDegraded> {
    match serde_json::from_str::<Scenario>(&raw) {
        Ok(scenario) if scenario.is_well_formed() => Ok(scenario),
        Ok(_) => Err(GenerationDegraded::MalformedOutput {
            raw,
            reason: "scenario has a blank title or an empty list".to_owned(),
        }),
        Err(e) => Err(GenerationDegraded::MalformedOutput {
            reason: e.to_string(),
            raw,
        }),
    }
}

/// Tier 2: wraps unstructured service output in the raw-text template.
///
/// # Errors
///
/// Passes `reason` through unchanged when there is no raw output to wrap.
pub fn raw_text_scenario(
    command: &GenerateScenario,
    templates: &FallbackTemplates,
    reason: GenerationDegraded,
) -> Result<Scenario, GenerationDegraded> {
    match reason {
        GenerationDegraded::MalformedOutput { raw, .. } => {
            let body: String = raw.chars().take(OVERVIEW_PREFIX_CHARS).collect();
            Ok(from_template(command, &templates.raw_text, &body))
        }
        other @ GenerationDegraded::ServiceFailed(_) => Err(other),
    }
}

/// Tier 3: builds a scenario from the request alone.
#[must_use]
pub fn local_scenario(command: &GenerateScenario, templates: &FallbackTemplates) -> Scenario {
    from_template(command, &templates.local, &command.prompt)
}

/// Walks the fallback tiers until one yields a scenario.
#[must_use]
pub fn resolve(
    command: &GenerateScenario,
    templates: &FallbackTemplates,
    primary: Result<Scenario, GenerationDegraded>,
) -> (Scenario, ScenarioSource) {
    let mut outcome = primary.map(|scenario| (scenario, ScenarioSource::Generated));
    for (source, tier) in FALLBACK_TIERS {
        outcome = match outcome {
            Ok(done) => return done,
            Err(reason) => {
                tracing::warn!(%reason, next_tier = ?source, "scenario tier degraded");
                tier(command, templates, reason).map(|scenario| (scenario, source))
            }
        };
    }
    outcome.unwrap_or_else(|reason| {
        tracing::warn!(%reason, next_tier = ?ScenarioSource::Local, "scenario tier degraded");
        (local_scenario(command, templates), ScenarioSource::Local)
    })
}

fn from_template(command: &GenerateScenario, template: &ScenarioTemplate, body: &str) -> Scenario {
    Scenario {
        title: fallback_title(command),
        overview: format!("{}{body}", template.overview_prefix),
        roles: template.roles.clone(),
        opening_dialogue: template.opening_dialogue.clone(),
        learning_goals: template.learning_goals.clone(),
    }
}

fn fallback_title(command: &GenerateScenario) -> String {
    let title = match command.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title.to_owned(),
        _ => command.prompt.chars().take(TITLE_PREFIX_CHARS).collect(),
    };
    if title.trim().is_empty() {
        UNTITLED.to_owned()
    } else {
        title
    }
}
