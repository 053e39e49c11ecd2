//! End-to-end submission scenarios through the handler and the HTTP layer.

use axum::extract::{Form, State};
use contact_relay::config::MailConfig;
use contact_relay::http::{submit_contact, AppState};
use contact_relay::schema::RawSubmission;
use contact_relay::submit::{handle_submission, SubmissionResult};
use contact_relay::testing::MockDispatch;
use std::sync::Arc;

fn config() -> MailConfig {
    MailConfig::new("Site <no-reply@example.com>", "inbox@example.com", "re_test")
}

fn ana() -> RawSubmission {
    RawSubmission {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        message: "Hello, I need help with strategy.".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn accepted_submission_is_relayed_with_reply_to() {
    let dispatch = MockDispatch::new();

    let result = handle_submission(&dispatch, &config(), &ana()).await;

    assert_eq!(result, SubmissionResult::Accepted);
    assert_eq!(dispatch.call_count(), 1);

    let sent = dispatch.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "ana@example.com");
    assert_eq!(sent[0].to, "inbox@example.com");
    assert_eq!(sent[0].subject, "New contact from Ana");
    assert!(sent[0].html.contains("Hello, I need help with strategy."));
}

#[tokio::test]
async fn invalid_fields_reject_without_dispatch() {
    let dispatch = MockDispatch::new();
    let raw = RawSubmission {
        name: String::new(),
        email: "bad".to_string(),
        message: "short".to_string(),
        ..Default::default()
    };

    let result = handle_submission(&dispatch, &config(), &raw).await;

    let SubmissionResult::Rejected { field_errors } = result else {
        panic!("expected Rejected");
    };
    assert!(field_errors.contains_key("name"));
    assert!(field_errors.contains_key("email"));
    assert!(field_errors.contains_key("message"));
    assert_eq!(dispatch.call_count(), 0);
}

#[tokio::test]
async fn provider_outage_yields_server_error() {
    let dispatch = MockDispatch::failing();

    let result = handle_submission(&dispatch, &config(), &ana()).await;

    assert_eq!(result, SubmissionResult::ServerError);
    assert_eq!(dispatch.call_count(), 1);
}

#[tokio::test]
async fn honeypot_fakes_success_and_sends_nothing() {
    let dispatch = MockDispatch::new();
    let mut raw = ana();
    raw.website_url = "http://spam.example".to_string();

    let result = handle_submission(&dispatch, &config(), &raw).await;

    assert_eq!(result, SubmissionResult::Accepted);
    assert_eq!(dispatch.call_count(), 0);
}

#[tokio::test]
async fn repeated_submissions_are_independent() {
    let dispatch = MockDispatch::new();
    let cfg = config();

    for _ in 0..3 {
        let result = handle_submission(&dispatch, &cfg, &ana()).await;
        assert_eq!(result, SubmissionResult::Accepted);
    }
    assert_eq!(dispatch.call_count(), 3);
}

#[tokio::test]
async fn http_endpoint_returns_form_state_json() {
    let dispatch = Arc::new(MockDispatch::new());
    let state = Arc::new(AppState {
        dispatch: dispatch.clone(),
        config: config(),
    });

    let response = submit_contact(State(state.clone()), Form(ana())).await;
    let json = serde_json::to_value(&response.0).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "message": "success"}));
    assert_eq!(dispatch.call_count(), 1);

    let bad = RawSubmission {
        email: "not-an-address".to_string(),
        ..ana()
    };
    let response = submit_contact(State(state), Form(bad)).await;
    let json = serde_json::to_value(&response.0).unwrap();
    assert_eq!(json["success"], serde_json::json!(false));
    assert_eq!(json["errors"]["email"], serde_json::json!(["invalid_email"]));
    // Still one call: the rejected post never reached dispatch.
    assert_eq!(dispatch.call_count(), 1);
}

#[tokio::test]
async fn http_endpoint_reports_server_error_generically() {
    let dispatch = Arc::new(MockDispatch::failing());
    let state = Arc::new(AppState {
        dispatch,
        config: config(),
    });

    let response = submit_contact(State(state), Form(ana())).await;
    let json = serde_json::to_value(&response.0).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"success": false, "message": "server_error"})
    );
}
