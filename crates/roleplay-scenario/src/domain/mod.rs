//! Domain layer for scenario generation.

pub mod commands;
pub mod prompts;
pub mod templates;
pub mod tiers;
