use coderoom_core::ServerEvent;
use reqwest::StatusCode;

use crate::integration::init_tracing;
use crate::utils::{MockBackend, RunReply, TestClient, TestServer, run_request};

#[tokio::test]
async fn test_run_backend_failure() {
    init_tracing();

    let server = TestServer::start(MockBackend::failing()).await.unwrap();
    let mut a = TestClient::connect(&server.ws_url(), "A").await.unwrap();
    a.join("abc").await.unwrap();

    let reply = server
        .run(&run_request("print(1)", "python", Some("abc")))
        .await
        .unwrap();

    let RunReply::Err(status, body) = reply else {
        panic!("Backend failure must surface as an error");
    };
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Execution failed");

    match a.next_event().await.unwrap() {
        ServerEvent::ExecutionResult { output } => {
            assert_eq!(output, "Execution failed");
            assert!(!output.contains("secret"));
        }
        other => panic!("Unexpected event {other:?}"),
    }
}
