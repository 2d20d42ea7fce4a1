//! Roleplay backend — sessions.
//!
//! Binds each generated scenario to an identifier, a publish flag and a
//! message log, held in process memory for the lifetime of the server.

pub mod application;
pub mod domain;
pub mod store;
