//! HTTP front end for emotion detection.
//!
//! ## Endpoints
//!
//! - `POST /detect-text-emotion` - body `{ "text": string }`
//! - `POST /detect-voice-emotion` - body `{ "transcript": string }`, echoes the transcript
//! - `GET /emotions` - display metadata for every category
//! - `GET /health` - liveness probe
//!
//! Every response carries permissive CORS headers. Any `OPTIONS` request is
//! answered by the CORS layer with an empty 200 and never reaches a handler.

mod error;
mod handlers;
mod types;


pub use error::ApiError;
pub use types::{DetectionResponse, ErrorBody, HealthResponse};

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::content::{ContentStore, HistorySink};

/// Largest accepted request body; larger bodies get a JSON 413
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Collaborators shared by all requests
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub history: Arc<dyn HistorySink>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, history: Arc<dyn HistorySink>) -> Self {
        Self { store, history }
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/detect-text-emotion",
            post(handlers::detect_text_emotion),
        )
        .route(
            "/detect-voice-emotion",
            post(handlers::detect_voice_emotion),
        )
        .route("/emotions", get(handlers::list_emotions))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors_layer())
}

/// Serve the router on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Emotion service listening on {}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
