mod connection;
mod events;
mod execution;
mod language;
mod room;

pub use connection::ConnectionId;
pub use events::{ClientEvent, ServerEvent};
pub use execution::{ErrorBody, ExecutionRequest, RunResponse};
pub use language::Language;
pub use room::{DEFAULT_CODE, DEFAULT_LANGUAGE, RoomId, RoomState};
