//! Application layer for realtime sessions.

pub mod command_handlers;
