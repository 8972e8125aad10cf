use coderoom_core::ServerEvent;

use crate::integration::init_tracing;
use crate::utils::{MockBackend, TestClient, TestServer};

#[tokio::test]
async fn test_room_isolation() {
    init_tracing();

    let server = TestServer::start(MockBackend::new()).await.unwrap();
    let mut a1 = TestClient::connect(&server.ws_url(), "A1").await.unwrap();
    let mut b1 = TestClient::connect(&server.ws_url(), "B1").await.unwrap();
    let mut a2 = TestClient::connect(&server.ws_url(), "A2").await.unwrap();
    a1.join("r1").await.unwrap();
    b1.join("r1").await.unwrap();
    a2.join("r2").await.unwrap();

    a1.change_code("r1", "r1 code").await.unwrap();
    a1.change_language("r1", "go").await.unwrap();

    assert_eq!(
        b1.next_event().await.unwrap(),
        ServerEvent::CodeChange("r1 code".into())
    );
    assert_eq!(
        b1.next_event().await.unwrap(),
        ServerEvent::LanguageChange("go".into())
    );
    assert!(a2.is_silent().await, "Other rooms must not see the edit");

    let mut late = TestClient::connect(&server.ws_url(), "late").await.unwrap();
    let snapshot = late.join("r2").await.unwrap();
    assert_eq!(snapshot, ("// Start coding".to_string(), "javascript".to_string()));
}
