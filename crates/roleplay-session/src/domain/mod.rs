//! Domain layer for sessions.

pub mod aggregates;
pub mod commands;
pub mod identifiers;
