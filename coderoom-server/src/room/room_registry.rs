use coderoom_core::{RoomId, RoomState};
use dashmap::DashMap;
use tracing::debug;

/// In-memory table of room state. Holds data only; delivery is the gateway's job.
///
/// Every operation locks a single map shard, so rooms never block each other
/// unless they hash to the same shard, and reads of one room are linearizable
/// with its writes.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomId, RoomState>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the room's state, creating it with defaults on first use.
    pub fn get_or_create(&self, room_id: &RoomId) -> RoomState {
        if let Some(room) = self.rooms.get(room_id) {
            return room.clone();
        }

        self.rooms.entry(room_id.clone()).or_default().clone()
    }

    /// Replaces the room's code. Unknown rooms are ignored.
    pub fn set_code(&self, room_id: &RoomId, code: String) {
        match self.rooms.get_mut(room_id) {
            Some(mut room) => room.code = code,
            None => debug!("set_code for unknown room '{}' ignored", room_id),
        }
    }

    /// Replaces the room's language tag. Unknown rooms are ignored.
    pub fn set_language(&self, room_id: &RoomId, language: String) {
        match self.rooms.get_mut(room_id) {
            Some(mut room) => room.language = language,
            None => debug!("set_language for unknown room '{}' ignored", room_id),
        }
    }

    pub fn snapshot(&self, room_id: &RoomId) -> Option<RoomState> {
        self.rooms.get(room_id).map(|room| room.clone())
    }

    pub fn remove(&self, room_id: &RoomId) -> Option<RoomState> {
        self.rooms.remove(room_id).map(|(_, state)| state)
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
