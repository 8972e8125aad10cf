use coderoom_core::ServerEvent;

use crate::integration::init_tracing;
use crate::utils::{MockBackend, TestClient, TestServer};

#[tokio::test]
async fn test_switch_rooms() {
    init_tracing();

    let server = TestServer::start(MockBackend::new()).await.unwrap();
    let mut a = TestClient::connect(&server.ws_url(), "A").await.unwrap();
    let mut b = TestClient::connect(&server.ws_url(), "B").await.unwrap();
    let mut c = TestClient::connect(&server.ws_url(), "C").await.unwrap();
    a.join("one").await.unwrap();
    b.join("one").await.unwrap();
    c.join("two").await.unwrap();

    b.join("two").await.unwrap();

    a.change_code("one", "for room one").await.unwrap();
    c.change_code("two", "for room two").await.unwrap();

    assert_eq!(
        b.next_event().await.unwrap(),
        ServerEvent::CodeChange("for room two".into())
    );
    assert!(b.is_silent().await, "B must no longer hear room one");
    assert_eq!(server.state.gateway.member_count(&"one".into()), 1);
    assert_eq!(server.state.gateway.member_count(&"two".into()), 2);
}
