use coderoom_core::ServerEvent;

use crate::integration::init_tracing;
use crate::utils::{MockBackend, TestClient, TestServer};

#[tokio::test]
async fn test_rapid_code_changes() {
    init_tracing();

    let server = TestServer::start(MockBackend::new()).await.unwrap();
    let mut a = TestClient::connect(&server.ws_url(), "A").await.unwrap();
    let mut b = TestClient::connect(&server.ws_url(), "B").await.unwrap();
    a.join("abc").await.unwrap();
    b.join("abc").await.unwrap();

    let edits: Vec<String> = (0..50).map(|i| format!("let v = {i};")).collect();
    for edit in &edits {
        a.change_code("abc", edit).await.unwrap();
    }

    for edit in &edits {
        assert_eq!(
            b.next_event().await.unwrap(),
            ServerEvent::CodeChange(edit.clone()),
            "Edits must arrive in the order they were sent"
        );
    }

    let mut late = TestClient::connect(&server.ws_url(), "late").await.unwrap();
    let (code, _) = late.join("abc").await.unwrap();
    assert_eq!(&code, edits.last().unwrap());
}
