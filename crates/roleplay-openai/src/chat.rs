//! Chat Completions adapter for scenario generation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use roleplay_core::services::{CompletionRequest, GenerativeTextService, ServiceError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{endpoint, status_error, transport_error};

/// Default chat model for scenario generation.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o";

/// Upper bound on a completion request. Past it the caller falls back to a
/// locally built scenario.
pub const CHAT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `GenerativeTextService` backed by the Chat Completions endpoint.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    api_key: SecretString,
    model: String,
    url: String,
    timeout: Duration,
}

impl ChatCompletionsClient {
    /// Creates a client posting to `{base_url}/chat/completions`.
    #[must_use]
    pub fn new(
        client: Client,
        api_key: SecretString,
        base_url: &str,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            model: model.into(),
            url: endpoint(base_url, "chat/completions"),
            timeout: CHAT_REQUEST_TIMEOUT,
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
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[async_trait]
impl GenerativeTextService for ChatCompletionsClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_instruction,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
        };

        debug!(model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(format!("chat completion body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ServiceError::Decode("chat completion had no content".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use roleplay_core::services::{CompletionRequest, GenerativeTextService, ServiceError};
    use secrecy::SecretString;
    use serde_json::json;

    use super::ChatCompletionsClient;
    use crate::stub::{StubResponse, spawn_stub};

    fn request() -> CompletionRequest {
        CompletionRequest {
            system_instruction: "Reply with JSON.".to_owned(),
            user_instruction: "Emotion: sad\nPrompt: lost key".to_owned(),
            temperature: 0.7,
            max_output_tokens: 700,
        }
    }

    fn client(base_url: &str) -> ChatCompletionsClient {
        ChatCompletionsClient::new(
            reqwest::Client::new(),
            SecretString::from("sk-test".to_owned()),
            base_url,
            "gpt-4o",
        )
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_content_and_sends_request_shape() {
        // Arrange
        let stub = spawn_stub(
            "/chat/completions",
            StubResponse::ok(json!({
                "choices": [{ "message": { "role": "assistant", "content": "{\"title\":\"x\"}" } }]
            })),
        )
        .await;

        // Act
        let text = client(&stub.base_url).complete(&request()).await.unwrap();

        // Assert
        assert_eq!(text, "{\"title\":\"x\"}");
        let seen = stub.last_request().unwrap();
        assert_eq!(seen.authorization.as_deref(), Some("Bearer sk-test"));
        assert_eq!(seen.body["model"], "gpt-4o");
        assert_eq!(seen.body["max_tokens"], 700);
        assert_eq!(seen.body["messages"][0]["role"], "system");
        assert_eq!(seen.body["messages"][1]["content"], "Emotion: sad\nPrompt: lost key");
    }

    #[tokio::test]
    async fn test_complete_maps_non_success_status() {
        let stub = spawn_stub(
            "/chat/completions",
            StubResponse::status(500, json!({ "error": "boom" })),
        )
        .await;

        let result = client(&stub.base_url).complete(&request()).await;

        match result {
            Err(ServiceError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("boom"));
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_response_without_choices() {
        let stub =
            spawn_stub("/chat/completions", StubResponse::ok(json!({ "choices": [] }))).await;

        let result = client(&stub.base_url).complete(&request()).await;

        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[tokio::test]
    async fn test_complete_reports_transport_error_when_unreachable() {
        let result = client("http://127.0.0.1:9").complete(&request()).await;

        assert!(matches!(result, Err(ServiceError::Transport(_))));
    }

    #[tokio::test]
    async fn test_complete_times_out_on_stalled_upstream() {
        let stub = spawn_stub(
            "/chat/completions",
            StubResponse::ok(json!({ "choices": [] })).delayed(Duration::from_secs(5)),
        )
        .await;

        let result = client(&stub.base_url)
            .with_timeout(Duration::from_millis(100))
            .complete(&request())
            .await;

        assert!(matches!(result, Err(ServiceError::Transport(_))));
    }
}
