//! Routes for scenario creation, publishing and retrieval.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use roleplay_core::scenario::Scenario;
use roleplay_scenario::application::command_handlers::handle_generate_scenario;
use roleplay_scenario::domain::commands::GenerateScenario;
use roleplay_session::application::command_handlers::{
    handle_create_session, handle_publish_scenario,
};
use roleplay_session::application::query_handlers::{ScenarioView, get_scenario_by_id};
use roleplay_session::domain::commands::{CreateSession, PublishScenario};
use roleplay_session::domain::identifiers::parse_session_id;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /create.
#[derive(Debug, Deserialize)]
pub struct CreateScenarioRequest {
    /// Free-text description of the situation to train for.
    pub prompt: String,
    /// Emotion the scenario should carry.
    pub emotion: String,
    /// Title used when the scenario has to be built from a template.
    #[serde(default)]
    pub title: Option<String>,
}

/// Response body for POST /create.
#[derive(Debug, Serialize)]
pub struct CreateScenarioResponse {
    /// Identifier of the new session.
    pub session_id: Uuid,
    /// The scenario stored under it.
    pub scenario: Scenario,
}

/// Request body for POST /publish.
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    /// Session to publish. Kept as text so unknown ids answer 404.
    pub session_id: String,
}

/// Response body for POST /publish.
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    /// The published session.
    pub session_id: Uuid,
    /// Always `true`.
    pub published: bool,
}

/// POST /create
///
/// Always answers with a scenario; only a body missing `prompt` or
/// `emotion` is rejected, by the extractor.
#[instrument(skip(state, request), fields(emotion = %request.emotion))]
async fn create_scenario(
    State(state): State<AppState>,
    Json(request): Json<CreateScenarioRequest>,
) -> Json<CreateScenarioResponse> {
    let command = GenerateScenario {
        correlation_id: Uuid::new_v4(),
        prompt: request.prompt,
        emotion: request.emotion,
        title: request.title,
    };

    info!(correlation_id = %command.correlation_id, "handling generate_scenario command");

    // The store is only touched after generation has finished.
    let generated =
        handle_generate_scenario(&command, &*state.text_service, &state.templates).await;

    let created = handle_create_session(
        CreateSession {
            correlation_id: command.correlation_id,
            scenario: generated.scenario.clone(),
            emotion: command.emotion,
        },
        state.clock.as_ref(),
        &state.sessions,
    )
    .await;

    Json(CreateScenarioResponse {
        session_id: created.session_id,
        scenario: generated.scenario,
    })
}

/// POST /publish
#[instrument(skip(state, request), fields(session_id = %request.session_id))]
async fn publish_scenario(
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, ApiError> {
    let command = PublishScenario {
        correlation_id: Uuid::new_v4(),
        session_id: parse_session_id(&request.session_id)?,
    };

    info!(correlation_id = %command.correlation_id, "handling publish_scenario command");

    handle_publish_scenario(&command, &state.sessions).await?;

    Ok(Json(PublishResponse {
        session_id: command.session_id,
        published: true,
    }))
}

/// GET /{session_id}
#[instrument(skip(state))]
async fn get_scenario(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ScenarioView>, ApiError> {
    let session_id = parse_session_id(&session_id)?;
    let view = get_scenario_by_id(session_id, &state.sessions).await?;
    Ok(Json(view))
}

/// Returns the router for scenario endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_scenario))
        .route("/publish", post(publish_scenario))
        .route("/{session_id}", get(get_scenario))
}
