//! Prompt construction for the primary generation tier.

use roleplay_core::services::CompletionRequest;

use super::commands::GenerateScenario;

/// Sampling temperature for scenario generation.
pub const SCENARIO_TEMPERATURE: f32 = 0.7;

/// Output bound for scenario generation, in tokens.
pub const SCENARIO_MAX_OUTPUT_TOKENS: u32 = 700;

const SYSTEM_INSTRUCTION: &str = "You are an expert roleplay scenario author \
for hospitality training. Produce a concise JSON object (and nothing else) with these fields:\n\
title, overview, roles (list of {name, instructions}), \
opening_dialogue (list of {speaker, line}), learning_goals (list of strings).\n\
Keep each text short and actionable.";

/// Builds the completion request for a scenario.
#[must_use]
pub fn scenario_request(command: &GenerateScenario) -> CompletionRequest {
    CompletionRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_owned(),
        user_instruction: format!(
            "Emotion: {}\nPrompt: {}\nReturn valid JSON only.",
            command.emotion, command.prompt
        ),
        temperature: SCENARIO_TEMPERATURE,
        max_output_tokens: SCENARIO_MAX_OUTPUT_TOKENS,
    }
}
