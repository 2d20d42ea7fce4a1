//! Test text services — fake `GenerativeTextService` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use roleplay_core::services::{CompletionRequest, GenerativeTextService, ServiceError};

/// A text service that answers every request with the same text and records
/// the requests it received.
#[derive(Debug)]
pub struct CannedTextService {
    response: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl CannedTextService {
    /// Create a service that always returns `response`.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeTextService for CannedTextService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// A text service that always fails as if the network were down.
#[derive(Debug)]
pub struct FailingTextService;

#[async_trait]
impl GenerativeTextService for FailingTextService {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, ServiceError> {
        Err(ServiceError::Transport("connection refused".into()))
    }
}
