// http server mode - exposes the relay the way the front-end expects

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    routing::{any, get},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{Error, Relay};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub struct Server;

impl Server {
    /// Routes only, so tests can drive it without binding a socket.
    pub fn router(relay: Arc<Relay>) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/ask-salama", any(ask))
            // path the netlify front-end was built against
            .route("/.netlify/functions/ask-salama", any(ask))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(relay)
    }

    pub async fn run(relay: Relay, host: &str, port: u16) -> Result<(), Error> {
        let app = Self::router(Arc::new(relay));

        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        tracing::info!("server running at http://{addr}");

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        Ok(())
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// every method lands here; the relay itself turns away anything but POST
async fn ask(
    State(relay): State<Arc<Relay>>,
    method: Method,
    body: Bytes,
) -> (StatusCode, Json<serde_json::Value>) {
    let outcome = relay.handle(method.as_str(), &body).await;
    (outcome.status(), Json(outcome.body()))
}
