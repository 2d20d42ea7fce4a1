//! Local HTTP stub standing in for the upstream API in adapter tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;

/// Canned reply served by the stub.
#[derive(Clone)]
pub struct StubResponse {
    status: StatusCode,
    body: Value,
    delay: Duration,
}

impl StubResponse {
    pub fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A request as seen by the stub.
#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    response: StubResponse,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct Stub {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl Stub {
    pub fn last_request(&self) -> Option<SeenRequest> {
        self.seen.lock().unwrap().last().cloned()
    }
}

async fn handle(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    state
        .seen
        .lock()
        .unwrap()
        .push(SeenRequest { authorization, body });
    tokio::time::sleep(state.response.delay).await;
    (state.response.status, Json(state.response.body.clone()))
}

/// Serves `response` at `path` on an ephemeral local port.
pub async fn spawn_stub(path: &str, response: StubResponse) -> Stub {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route(path, post(handle)).with_state(StubState {
        response,
        seen: Arc::clone(&seen),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Stub {
        base_url: format!("http://{addr}"),
        seen,
    }
}
