use coderoom_core::{ConnectionId, ServerEvent};
use tokio::sync::mpsc;

/// Per-connection queue of events waiting to be written to its socket.
pub type Outbox = mpsc::UnboundedSender<ServerEvent>;

/// Commands consumed by a room task, in the order the gateway accepted them.
#[derive(Debug)]
pub enum RoomCommand {
    /// A connection bound itself to the room and wants the current snapshot.
    Join {
        connection_id: ConnectionId,
        outbox: Outbox,
    },

    /// The connection left (disconnect or switch to another room).
    Leave { connection_id: ConnectionId },

    CodeChange {
        connection_id: ConnectionId,
        code: String,
    },

    LanguageChange {
        connection_id: ConnectionId,
        language: String,
    },

    /// Output a member produced on its side; relayed, not stored.
    OutputChange {
        connection_id: ConnectionId,
        output: String,
    },

    /// Deliver an event to every member, sender included.
    Broadcast { event: ServerEvent },
}
