//! Domain layer for realtime sessions.

pub mod commands;
