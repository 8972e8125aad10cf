use coderoom_core::{DEFAULT_CODE, DEFAULT_LANGUAGE};

use crate::integration::init_tracing;
use crate::utils::{MockBackend, TestClient, TestServer};

#[tokio::test]
async fn test_join_receives_sync() {
    init_tracing();

    let server = TestServer::start(MockBackend::new())
        .await
        .expect("Failed to start server");
    let mut client = TestClient::connect(&server.ws_url(), "A")
        .await
        .expect("Failed to connect");

    let (code, language) = client.join("abc").await.expect("Join failed");

    assert_eq!(code, DEFAULT_CODE);
    assert_eq!(language, DEFAULT_LANGUAGE);
    assert!(client.is_silent().await, "Sync should be sent exactly once");
    assert_eq!(server.state.gateway.member_count(&"abc".into()), 1);

    client.close().await.expect("Failed to close client");
}
