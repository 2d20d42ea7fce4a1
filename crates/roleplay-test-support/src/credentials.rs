//! Test credential services — fake `RealtimeCredentialService` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use roleplay_core::services::{RealtimeCredentialService, ServiceError};

/// A credential service that records every `(model, voice)` pair it is asked
/// for and answers with a payload echoing them back.
#[derive(Debug, Default)]
pub struct RecordingCredentialService {
    issued: Mutex<Vec<(String, String)>>,
}

impl RecordingCredentialService {
    /// Create an empty recording service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all `(model, voice)` pairs requested so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn issued(&self) -> Vec<(String, String)> {
        self.issued.lock().unwrap().clone()
    }
}

#[async_trait]
impl RealtimeCredentialService for RecordingCredentialService {
    async fn issue(&self, model: &str, voice: &str) -> Result<serde_json::Value, ServiceError> {
        self.issued
            .lock()
            .unwrap()
            .push((model.to_owned(), voice.to_owned()));
        Ok(serde_json::json!({
            "id": "sess_test",
            "object": "realtime.session",
            "model": model,
            "voice": voice,
            "client_secret": { "value": "ek_test", "expires_at": 1_768_471_260 },
        }))
    }
}

/// A credential service that rejects every request, either with an upstream
/// status or, when `status` is `None`, with a transport failure.
#[derive(Debug)]
pub struct RejectingCredentialService {
    /// Status to report; `None` simulates a timeout.
    pub status: Option<u16>,
    /// Body text to report alongside the status.
    pub body: String,
}

#[async_trait]
impl RealtimeCredentialService for RejectingCredentialService {
    async fn issue(&self, _model: &str, _voice: &str) -> Result<serde_json::Value, ServiceError> {
        match self.status {
            Some(status) => Err(ServiceError::Status {
                status,
                body: self.body.clone(),
            }),
            None => Err(ServiceError::Transport(self.body.clone())),
        }
    }
}
