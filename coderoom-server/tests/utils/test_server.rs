use coderoom_core::{ErrorBody, ExecutionRequest, RunResponse};
use coderoom_server::{AppState, ExecutionConfig, router};
use reqwest::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::mock_backend::MockBackend;

/// Poll interval used by test servers (ms).
pub const TEST_POLL_INTERVAL_MS: u64 = 10;

/// Poll budget used by test servers (ms).
pub const TEST_MAX_POLL_MS: u64 = 1000;

/// In-process server on an ephemeral port, backed by a [`MockBackend`].
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    pub backend: Arc<MockBackend>,
    http: reqwest::Client,
}

pub enum RunReply {
    Ok(RunResponse),
    Err(StatusCode, ErrorBody),
}

impl TestServer {
    pub async fn start(backend: MockBackend) -> anyhow::Result<Self> {
        Self::start_with_origins(backend, &[]).await
    }

    /// Like [`TestServer::start`], but CORS only admits `origins`.
    pub async fn start_with_origins(
        backend: MockBackend,
        origins: &[&str],
    ) -> anyhow::Result<Self> {
        let backend = Arc::new(backend);
        let config = ExecutionConfig {
            poll_interval: Duration::from_millis(TEST_POLL_INTERVAL_MS),
            max_poll_duration: Duration::from_millis(TEST_MAX_POLL_MS),
            ..ExecutionConfig::default()
        };

        let state = AppState::new(backend.clone(), &config);
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        let app = router(state.clone(), &origins);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            state,
            backend,
            http: reqwest::Client::new(),
        })
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub async fn get(
        &self,
        path: &str,
        origin: Option<&str>,
    ) -> anyhow::Result<reqwest::Response> {
        let mut request = self.http.get(format!("http://{}{}", self.addr, path));
        if let Some(origin) = origin {
            request = request.header("Origin", origin);
        }
        Ok(request.send().await?)
    }

    pub async fn run(&self, request: &ExecutionRequest) -> anyhow::Result<RunReply> {
        let response = self
            .http
            .post(format!("http://{}/run", self.addr))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(RunReply::Ok(response.json().await?))
        } else {
            Ok(RunReply::Err(status, response.json().await?))
        }
    }
}

pub fn run_request(code: &str, language: &str, room: Option<&str>) -> ExecutionRequest {
    ExecutionRequest {
        code: code.into(),
        language: language.into(),
        room_id: room.map(Into::into),
        stdin: None,
    }
}
