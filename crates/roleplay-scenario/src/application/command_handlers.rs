//! Command handlers for scenario generation.
//!
//! The handler makes a single call to the text service and hands the outcome
//! to the tier combinator. It never returns an error.

use roleplay_core::command::Command;
use roleplay_core::scenario::Scenario;
use roleplay_core::services::GenerativeTextService;
use tracing::{info, warn};

use crate::domain::commands::GenerateScenario;
use crate::domain::prompts::scenario_request;
use crate::domain::templates::FallbackTemplates;
use crate::domain::tiers::{self, GenerationDegraded, ScenarioSource};

/// Result of a successfully handled command.
#[derive(Debug, Clone)]
pub struct GeneratedScenario {
    /// The scenario, always well formed.
    pub scenario: Scenario,
    /// Which tier produced it.
    pub source: ScenarioSource,
}

/// Handles the `GenerateScenario` command: asks the text service for a
/// structured scenario and falls back through the templates when the call
/// fails or the output does not parse.
pub async fn handle_generate_scenario(
    command: &GenerateScenario,
    service: &dyn GenerativeTextService,
    templates: &FallbackTemplates,
) -> GeneratedScenario {
    let request = scenario_request(command);

    let primary = match service.complete(&request).await {
        Ok(raw) => tiers::parse_scenario(raw),
        Err(e) => {
            warn!(
                correlation_id = %command.correlation_id(),
                error = %e,
                "text service call failed"
            );
            Err(GenerationDegraded::ServiceFailed(e.to_string()))
        }
    };

    let (scenario, source) = tiers::resolve(command, templates, primary);

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        source = ?source,
        "scenario generated"
    );

    GeneratedScenario { scenario, source }
}
