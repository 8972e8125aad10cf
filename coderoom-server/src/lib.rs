mod api;
mod config;
mod error;
mod execution;
mod room;

pub use api::*;
pub use config::*;
pub use error::*;
pub use execution::*;
pub use room::*;
