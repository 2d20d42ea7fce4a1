//! Roleplay backend — HTTP API.
//!
//! Composes scenario generation, the session store and the realtime
//! credential broker behind an axum router.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use crate::state::AppState;

/// Builds the application router with every route mounted.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/scenario", routes::scenario::router())
        .nest("/api/realtime", routes::realtime::router())
        .nest("/api/session", routes::session::router())
        .with_state(app_state)
}
