pub use coderoom_core::model::{ConnectionId, RoomId};

pub mod model {
    pub use coderoom_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use coderoom_server::*;
}
