//! Roleplay Core — shared domain abstractions.
//!
//! This crate defines the scenario data model, the domain error type and the
//! capability traits every other crate depends on. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod scenario;
pub mod services;
