//! Application layer for scenario generation.

pub mod command_handlers;
