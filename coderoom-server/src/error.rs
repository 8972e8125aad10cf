use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coderoom_core::ErrorBody;
use std::time::Duration;
use thiserror::Error;

/// Failure talking to the execution backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed backend response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("job submission failed: {0}")]
    Submission(#[source] BackendError),

    #[error("job polling failed: {0}")]
    Poll(#[source] BackendError),

    #[error("job did not finish within {0:?}")]
    Timeout(Duration),
}

impl ExecutionError {
    /// Text shown to the requester and to the room. Never carries backend details.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExecutionError::UnsupportedLanguage(_) => "Unsupported language",
            ExecutionError::Submission(_) | ExecutionError::Poll(_) => "Execution failed",
            ExecutionError::Timeout(_) => "Execution timed out",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ExecutionError::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
            ExecutionError::Submission(_) | ExecutionError::Poll(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ExecutionError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

/// Error surface of the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Execution(e) => {
                let body = ErrorBody {
                    error: e.user_message().to_owned(),
                };
                (e.status_code(), Json(body)).into_response()
            }
        }
    }
}
