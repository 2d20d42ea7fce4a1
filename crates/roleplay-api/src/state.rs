//! Shared application state.

use std::sync::Arc;

use roleplay_core::clock::SharedClock;
use roleplay_core::services::{GenerativeTextService, RealtimeCredentialService};
use roleplay_scenario::domain::templates::FallbackTemplates;
use roleplay_session::store::SessionStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Every session created by this process.
    pub sessions: Arc<SessionStore>,
    /// Service generating scenario text.
    pub text_service: Arc<dyn GenerativeTextService>,
    /// Service issuing realtime credentials.
    pub credential_service: Arc<dyn RealtimeCredentialService>,
    /// Content for the fallback generation tiers.
    pub templates: Arc<FallbackTemplates>,
    /// Source of session timestamps.
    pub clock: SharedClock,
    /// Realtime model used when a request names none.
    pub realtime_model: Arc<str>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        sessions: Arc<SessionStore>,
        text_service: Arc<dyn GenerativeTextService>,
        credential_service: Arc<dyn RealtimeCredentialService>,
        templates: Arc<FallbackTemplates>,
        clock: SharedClock,
        realtime_model: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            sessions,
            text_service,
            credential_service,
            templates,
            clock,
            realtime_model: realtime_model.into(),
        }
    }
}
