use crate::api::app::AppState;
use crate::error::{ApiError, ExecutionError};
use axum::Json;
use axum::extract::State;
use coderoom_core::{ExecutionRequest, RunResponse};
use tracing::{error, warn};

/// `POST /run`: execute the buffer, answer the caller, and tell the room.
pub async fn run_handler(
    State(state): State<AppState>,
    Json(request): Json<ExecutionRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let outcome = state
        .orchestrator
        .execute(&request.code, &request.language, request.stdin.as_deref())
        .await;

    match &outcome {
        Err(e @ ExecutionError::UnsupportedLanguage(_)) => warn!("Rejected run request: {}", e),
        Err(e) => error!("Execution error (room {:?}): {}", request.room_id, e),
        Ok(_) => {}
    }

    state.broadcaster.publish(request.room_id.as_ref(), &outcome);

    let result = outcome?;
    Ok(Json(RunResponse {
        output: result.output,
    }))
}
