mod execution_backend;
mod judge0;
mod orchestrator;
mod result_broadcaster;

pub use execution_backend::*;
pub use judge0::*;
pub use orchestrator::*;
pub use result_broadcaster::*;
