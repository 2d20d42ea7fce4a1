//! OpenAI-compatible HTTP adapters.
//!
//! Implements the core capability traits over `reqwest`: chat completions
//! for scenario text and realtime sessions for ephemeral voice credentials.

use roleplay_core::services::ServiceError;

pub mod chat;
pub mod realtime;

#[cfg(test)]
mod stub;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

fn transport_error(err: &reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Transport(format!("request timed out: {err}"))
    } else {
        ServiceError::Transport(err.to_string())
    }
}

async fn status_error(response: reqwest::Response) -> ServiceError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("failed to read response body: {e}"));
    ServiceError::Status { status, body }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}
