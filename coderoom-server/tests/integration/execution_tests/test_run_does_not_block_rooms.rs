use coderoom_core::ServerEvent;
use reqwest::StatusCode;

use crate::integration::init_tracing;
use crate::utils::{MockBackend, RunReply, TestClient, TestServer, run_request};

#[tokio::test]
async fn test_run_does_not_block_rooms() {
    init_tracing();

    // Nothing scripted: the job reports "running" until the poll budget runs out.
    let server = std::sync::Arc::new(TestServer::start(MockBackend::new()).await.unwrap());
    let mut a = TestClient::connect(&server.ws_url(), "A").await.unwrap();
    let mut b = TestClient::connect(&server.ws_url(), "B").await.unwrap();
    a.join("abc").await.unwrap();
    b.join("abc").await.unwrap();

    let run = tokio::spawn({
        let server = server.clone();
        async move {
            server
                .run(&run_request("while True: pass", "python", Some("abc")))
                .await
        }
    });

    a.change_code("abc", "edited while running").await.unwrap();
    assert_eq!(
        b.next_event().await.unwrap(),
        ServerEvent::CodeChange("edited while running".into())
    );
    assert!(!run.is_finished(), "Edits must not wait for the execution");

    let RunReply::Err(status, body) = run.await.unwrap().unwrap() else {
        panic!("Endless job must time out");
    };
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body.error, "Execution timed out");
    assert!(server.backend.poll_count() > 1);

    let expected = ServerEvent::ExecutionResult {
        output: "Execution timed out".into(),
    };
    assert_eq!(a.next_event().await.unwrap(), expected);
    assert_eq!(b.next_event().await.unwrap(), expected);
}
