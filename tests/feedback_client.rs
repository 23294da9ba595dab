//! Integration tests for the feedback widget against a mocked API.
//!
//! Covers:
//! - request shape (method, path, API key header, JSON body)
//! - success clears the form and shows a success toast
//! - non-2xx and transport failures keep the message and show an error toast
//! - blank messages never reach the network
//! - the spawned request path used by the terminal app

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lukz_dashboard::{
    App, FeedbackClient, FeedbackError, FeedbackForm, FeedbackSubmission, FormStatus, Settings,
    SymbolCatalog, ToastKind, Toaster,
};

const API_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> FeedbackClient {
    FeedbackClient::new(server.uri(), API_KEY)
}

// ============================================================================
// FeedbackClient
// ============================================================================

#[tokio::test]
async fn test_client_posts_json_with_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(header("X-API-Key", API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"message": "Great app!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let submission = FeedbackSubmission {
        message: "Great app!".to_string(),
    };
    client_for(&server).submit(&submission).await.unwrap();
}

#[tokio::test]
async fn test_client_maps_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid API key"})))
        .mount(&server)
        .await;

    let submission = FeedbackSubmission {
        message: "hello".to_string(),
    };
    match client_for(&server).submit(&submission).await {
        Err(FeedbackError::Status(status)) => assert_eq!(status.as_u16(), 401),
        other => panic!("Expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_client_reports_transport_errors() {
    // Nothing listens on the discard port
    let client = FeedbackClient::new("http://127.0.0.1:9", API_KEY);
    let submission = FeedbackSubmission {
        message: "hello".to_string(),
    };
    let result = client.submit(&submission).await;
    assert!(
        matches!(result, Err(FeedbackError::Transport(_))),
        "Expected Transport error, got: {result:?}"
    );
}

// ============================================================================
// FeedbackForm
// ============================================================================

#[tokio::test]
async fn test_form_success_clears_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(body_json(json!({"message": "Great app!"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = FeedbackForm::new();
    let mut toaster = Toaster::new();
    form.set_message("Great app!");
    form.submit(&client_for(&server), &mut toaster).await;

    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.message(), "");
    let toast = toaster.latest().expect("a toast is shown");
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.description, "Thank you for your feedback!");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, br#"{"message":"Great app!"}"#);
}

#[tokio::test]
async fn test_form_failure_keeps_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = FeedbackForm::new();
    let mut toaster = Toaster::new();
    form.set_message("Charts are slow");
    form.submit(&client_for(&server), &mut toaster).await;

    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.message(), "Charts are slow");
    let toast = toaster.latest().expect("a toast is shown");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.description, "Failed to submit feedback. Please try again.");
}

#[tokio::test]
async fn test_form_whitespace_never_sends() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = FeedbackForm::new();
    let mut toaster = Toaster::new();
    form.set_message("   ");
    form.submit(&client_for(&server), &mut toaster).await;

    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(toaster.latest().unwrap().kind, ToastKind::Error);
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// App: spawned request
// ============================================================================

#[tokio::test]
async fn test_app_spawned_submission_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(header("X-API-Key", API_KEY))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = App::new(Settings {
        api_url: server.uri(),
        api_key: API_KEY.to_string(),
        default_ticker: "AAPL".to_string(),
        catalog: SymbolCatalog::common(),
    })
    .unwrap();

    app.feedback.set_message("Love the search box");
    app.submit_feedback();
    assert!(app.feedback.is_submitting());
    assert_eq!(app.feedback.button_label(), "Submitting...");

    app.settle_feedback().await;
    assert_eq!(app.feedback.status(), FormStatus::Idle);
    assert_eq!(app.feedback.message(), "");
    assert_eq!(app.toaster.latest().unwrap().kind, ToastKind::Success);
}
