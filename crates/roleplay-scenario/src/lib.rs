//! Roleplay backend — scenario generation.
//!
//! Turns a free-text prompt and an emotion into a well-formed [`Scenario`]
//! by asking the generative text service for structured output and falling
//! back through fixed templates when that fails.
//!
//! [`Scenario`]: roleplay_core::scenario::Scenario

pub mod application;
pub mod domain;
