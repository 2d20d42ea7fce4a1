//! Roleplay backend — realtime voice sessions.
//!
//! Picks a voice for the requested emotion and forwards the request for a
//! short-lived credential to the realtime service.

pub mod application;
pub mod domain;
pub mod voice;
