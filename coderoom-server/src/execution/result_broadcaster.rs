use crate::error::ExecutionError;
use crate::execution::orchestrator::ExecutionResult;
use crate::room::SyncGateway;
use coderoom_core::{RoomId, ServerEvent};
use tracing::debug;

/// Fans an execution outcome out to the room that asked for it.
///
/// The direct reply to the requester is the caller's business; this only
/// covers the room side, requester included.
#[derive(Clone)]
pub struct ResultBroadcaster {
    gateway: SyncGateway,
}

impl ResultBroadcaster {
    pub fn new(gateway: SyncGateway) -> Self {
        Self { gateway }
    }

    /// Publishes the output, or the failure's user-facing message, as `execution-result`.
    pub fn publish(
        &self,
        room_id: Option<&RoomId>,
        outcome: &Result<ExecutionResult, ExecutionError>,
    ) {
        let Some(room_id) = room_id else {
            return;
        };

        let output = match outcome {
            Ok(result) => result.output.clone(),
            Err(e) => e.user_message().to_owned(),
        };

        if !self
            .gateway
            .broadcast(room_id, ServerEvent::ExecutionResult { output })
        {
            debug!("No live room '{}' for execution result", room_id);
        }
    }
}
