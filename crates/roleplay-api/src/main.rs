//! Roleplay backend API server entry point.

use std::sync::Arc;

use roleplay_api::config::Config;
use roleplay_api::error::AppError;
use roleplay_api::state::AppState;
use roleplay_core::clock::SystemClock;
use roleplay_openai::chat::ChatCompletionsClient;
use roleplay_openai::realtime::RealtimeSessionsClient;
use roleplay_session::store::SessionStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting roleplay API server");

    let config = Config::from_env()?;
    let templates = config.load_templates()?;

    // One connection pool shared by both upstream adapters.
    let http_client = reqwest::Client::builder().build()?;
    let text_service = ChatCompletionsClient::new(
        http_client.clone(),
        config.api_key.clone(),
        &config.base_url,
        config.scenario_model.clone(),
    )
    .with_timeout(config.scenario_timeout);
    let credential_service =
        RealtimeSessionsClient::new(http_client, config.api_key.clone(), &config.base_url);

    let app_state = AppState::new(
        Arc::new(SessionStore::new()),
        Arc::new(text_service),
        Arc::new(credential_service),
        Arc::new(templates),
        Arc::new(SystemClock),
        config.realtime_model.as_str(),
    );

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = roleplay_api::router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(addr = %config.bind_address, "Listening");

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("roleplay API server shut down");

    Ok(())
}

/// Resolves on Ctrl+C. If the handler cannot be installed the server runs
/// until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received SIGINT, initiating graceful shutdown");
}
