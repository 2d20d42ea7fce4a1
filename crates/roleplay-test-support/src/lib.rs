//! Shared test fakes and utilities for the roleplay training backend.

mod clock;
mod credentials;
mod text;

pub use clock::FixedClock;
pub use credentials::{RecordingCredentialService, RejectingCredentialService};
pub use text::{CannedTextService, FailingTextService};
