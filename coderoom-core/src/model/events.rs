use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};

/// Frames a client sends over the sync WebSocket.
///
/// Encoded as `{"event": "code-change", "data": {"roomId": "abc", "code": "x=1"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    JoinRoom { room_id: RoomId },
    CodeChange { room_id: RoomId, code: String },
    LanguageChange { room_id: RoomId, language: String },
    OutputChange { room_id: RoomId, output: String },
}

impl ClientEvent {
    pub fn room_id(&self) -> &RoomId {
        match self {
            ClientEvent::JoinRoom { room_id }
            | ClientEvent::CodeChange { room_id, .. }
            | ClientEvent::LanguageChange { room_id, .. }
            | ClientEvent::OutputChange { room_id, .. } => room_id,
        }
    }
}

/// Frames the server pushes to clients.
///
/// Relayed edits carry the bare value (`{"event": "code-change", "data": "x=1"}`),
/// the room is implied by the connection's binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    Sync { code: String, language: String },
    CodeChange(String),
    LanguageChange(String),
    OutputChange(String),
    ExecutionResult { output: String },
}
