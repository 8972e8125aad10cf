use crate::api::run_handler::run_handler;
use crate::api::ws_handler::ws_handler;
use crate::config::{ExecutionConfig, ServerConfig};
use crate::execution::{ExecutionBackend, ExecutionOrchestrator, Judge0Backend, ResultBroadcaster};
use crate::room::{RoomRegistry, SyncGateway};
use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub gateway: SyncGateway,
    pub orchestrator: ExecutionOrchestrator,
    pub broadcaster: ResultBroadcaster,
}

impl AppState {
    pub fn new(backend: Arc<dyn ExecutionBackend>, config: &ExecutionConfig) -> Self {
        let gateway = SyncGateway::new(Arc::new(RoomRegistry::new()));

        Self {
            broadcaster: ResultBroadcaster::new(gateway.clone()),
            orchestrator: ExecutionOrchestrator::from_config(backend, config),
            gateway,
        }
    }
}

pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/run", post(run_handler))
        .route("/ws", get(ws_handler))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the Judge0-backed application and serves it until the listener fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    if config.execution.rapidapi_key.is_empty() {
        warn!("RapidAPI key is empty; execution requests will be rejected by the backend");
    }

    let backend = Arc::new(Judge0Backend::new(&config.execution));
    let state = AppState::new(backend, &config.execution);

    if let Some(ttl) = config.room_idle_ttl {
        info!("Evicting rooms idle for {:?}", ttl);
        state.gateway.spawn_idle_sweeper(ttl);
    }

    let app = router(state, &config.cors_origins);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn index() -> &'static str {
    "coderoom: live rooms and code execution"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
