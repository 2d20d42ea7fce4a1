//! Routes for session message logs.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use roleplay_session::application::query_handlers::{MessagesView, get_messages_by_id};
use roleplay_session::domain::identifiers::parse_session_id;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /{session_id}/messages
#[instrument(skip(state))]
async fn get_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<MessagesView>, ApiError> {
    let session_id = parse_session_id(&session_id)?;
    let view = get_messages_by_id(session_id, &state.sessions).await?;
    Ok(Json(view))
}

/// Returns the router for session endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/{session_id}/messages", get(get_messages))
}
