//! Route modules organized by component.

pub mod health;
pub mod realtime;
pub mod scenario;
pub mod session;
