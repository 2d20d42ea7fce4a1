//! Routes for realtime voice sessions.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use roleplay_realtime::application::command_handlers::handle_mint_realtime_session;
use roleplay_realtime::domain::commands::MintRealtimeSession;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /session. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MintSessionRequest {
    /// Realtime model; the configured default when absent.
    pub model: Option<String>,
    /// Emotion used to pick a voice.
    pub emotion: Option<String>,
    /// Explicit voice, overriding the emotion.
    pub voice: Option<String>,
}

/// POST /session
///
/// Returns the realtime service's payload unmodified. A request without a
/// JSON body is treated as an empty object.
#[instrument(skip(state, request))]
async fn mint_session(
    State(state): State<AppState>,
    request: Option<Json<MintSessionRequest>>,
) -> Result<Json<Value>, ApiError> {
    let request = request.map(|Json(request)| request).unwrap_or_default();
    let command = MintRealtimeSession {
        correlation_id: Uuid::new_v4(),
        model: request.model,
        emotion: request.emotion,
        voice: request.voice,
    };

    info!(correlation_id = %command.correlation_id, "handling mint_realtime_session command");

    let payload = handle_mint_realtime_session(
        &command,
        &state.realtime_model,
        &*state.credential_service,
    )
    .await?;

    Ok(Json(payload))
}

/// Returns the router for realtime endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/session", post(mint_session))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use roleplay_test_support::{
        FailingTextService, RecordingCredentialService, RejectingCredentialService,
    };
    use tower::ServiceExt;

    use crate::state::test_state::{TEST_REALTIME_MODEL, app_state_with};

    fn post(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/session")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_mint_session_returns_payload_verbatim() {
        // Arrange
        let credentials = Arc::new(RecordingCredentialService::new());
        let app = router().with_state(app_state_with(
            Arc::new(FailingTextService),
            credentials.clone(),
        ));

        // Act
        let response = app
            .oneshot(post(&serde_json::json!({ "emotion": "happy" })))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["client_secret"]["value"], "ek_test");
        assert_eq!(json["voice"], "alloy");
        assert_eq!(
            credentials.issued(),
            vec![(TEST_REALTIME_MODEL.to_owned(), "alloy".to_owned())]
        );
    }

    #[tokio::test]
    async fn test_mint_session_accepts_empty_body_object() {
        let credentials = Arc::new(RecordingCredentialService::new());
        let app = router().with_state(app_state_with(
            Arc::new(FailingTextService),
            credentials.clone(),
        ));

        let response = app.oneshot(post(&serde_json::json!({}))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(credentials.issued()[0].1, "sage");
    }

    #[tokio::test]
    async fn test_mint_session_accepts_missing_body() {
        let credentials = Arc::new(RecordingCredentialService::new());
        let app = router().with_state(app_state_with(
            Arc::new(FailingTextService),
            credentials.clone(),
        ));
        let request = Request::builder()
            .method("POST")
            .uri("/session")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(credentials.issued()[0].1, "sage");
    }

    #[tokio::test]
    async fn test_mint_session_returns_502_when_upstream_unreachable() {
        // Arrange
        let app = router().with_state(app_state_with(
            Arc::new(FailingTextService),
            Arc::new(RejectingCredentialService {
                status: None,
                body: "timed out".to_owned(),
            }),
        ));

        // Act
        let response = app
            .oneshot(post(&serde_json::json!({ "emotion": "sad" })))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["error"], "upstream_unavailable");
    }
}
