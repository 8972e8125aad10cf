use coderoom_core::ServerEvent;
use reqwest::StatusCode;

use crate::integration::init_tracing;
use crate::utils::{MockBackend, RunReply, TestClient, TestServer, run_request};

#[tokio::test]
async fn test_run_unsupported_language() {
    init_tracing();

    let server = TestServer::start(MockBackend::new()).await.unwrap();
    let mut a = TestClient::connect(&server.ws_url(), "A").await.unwrap();
    a.join("abc").await.unwrap();

    let reply = server
        .run(&run_request("DISPLAY 'HI'.", "cobol", Some("abc")))
        .await
        .unwrap();

    let RunReply::Err(status, body) = reply else {
        panic!("cobol must be rejected");
    };
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Unsupported language");

    assert!(server.backend.submissions().is_empty());
    assert_eq!(server.backend.poll_count(), 0);
    assert_eq!(
        a.next_event().await.unwrap(),
        ServerEvent::ExecutionResult {
            output: "Unsupported language".into()
        }
    );
}
