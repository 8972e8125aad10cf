pub mod test_server;

pub use mock_backend::*;
pub use test_client::*;
pub use test_server::*;
