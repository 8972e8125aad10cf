mod app;
mod run_handler;
mod ws_handler;

pub use app::*;
pub use run_handler::*;
pub use ws_handler::*;
