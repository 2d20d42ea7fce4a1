//! Realtime sessions adapter for ephemeral voice credentials.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use roleplay_core::services::{RealtimeCredentialService, ServiceError};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

use crate::{endpoint, status_error, transport_error};

/// Recommended realtime model.
pub const DEFAULT_REALTIME_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";

/// Upper bound on a credential request.
pub const REALTIME_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// `RealtimeCredentialService` backed by the realtime sessions endpoint.
#[derive(Clone)]
pub struct RealtimeSessionsClient {
    client: Client,
    api_key: SecretString,
    url: String,
    timeout: Duration,
}

impl RealtimeSessionsClient {
    /// Creates a client posting to `{base_url}/realtime/sessions`.
    #[must_use]
    pub fn new(client: Client, api_key: SecretString, base_url: &str) -> Self {
        Self {
            client,
            api_key,
            url: endpoint(base_url, "realtime/sessions"),
            timeout: REALTIME_REQUEST_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct SessionRequest<'a> {
    model: &'a str,
    voice: &'a str,
}

#[async_trait]
impl RealtimeCredentialService for RealtimeSessionsClient {
    async fn issue(&self, model: &str, voice: &str) -> Result<serde_json::Value, ServiceError> {
        debug!(%model, %voice, "requesting realtime session");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .timeout(self.timeout)
            .json(&SessionRequest { model, voice })
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(format!("realtime session body: {e}")))
    }
}
