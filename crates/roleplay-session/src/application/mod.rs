//! Application layer for sessions.

pub mod command_handlers;
pub mod query_handlers;
