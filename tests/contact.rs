use std::sync::Arc;

use axum::http::{StatusCode, header};
use mulyam_contact::ERROR_MESSAGE;
use tower::ServiceExt;

mod common;

use common::{GatedEndpoint, MockEndpoint, Reply};

#[tokio::test]
async fn test_contact_page_renders_idle_form() {
    let app = common::create_test_app(MockEndpoint::new(Reply::Ok));

    let response = app.oneshot(common::get("/contact")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Get in Touch"));
    assert!(body.contains("Place an Order"));
    assert!(body.contains(r#"name="view""#));
    assert!(body.contains(r#"<option value="">Select category</option>"#));
    assert!(body.contains("Matching Sets (Pet + Owner)"));
    assert!(body.contains("Send Message"));
    assert!(!body.contains(" disabled"));
    assert!(!body.contains(ERROR_MESSAGE));
    assert!(body.contains("https://wa.me/91XXXXXXXXXX"));
    assert!(body.contains("mailto:hello@mulyam.in"));
    assert!(body.contains(r#"href="/faq""#));
    assert!(body.contains(r#"<script src="/static/js/contact.js" defer></script>"#));
    assert!(body.contains("data-contact-form"));
    assert!(!body.contains(r#"http-equiv="refresh""#));
}

#[tokio::test]
async fn test_successful_submission_shows_confirmation_and_clears_form() {
    let endpoint = MockEndpoint::new(Reply::Ok);
    let app = common::create_test_app(endpoint.clone());

    let response = app
        .oneshot(common::post_form("/contact", &common::asha("view-ok")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("We'll contact you on WhatsApp within 2 hours"));
    assert!(body.contains("Send another message"));
    assert!(!body.contains(r#"value="Asha""#));

    assert_eq!(endpoint.calls(), 1);
    let payload = endpoint.last_payload().unwrap();
    assert_eq!(payload.get("name"), Some("Asha"));
    assert_eq!(payload.get("email"), Some("asha@example.com"));
    assert_eq!(payload.get("phone"), Some("+911234567890"));
    assert_eq!(payload.get("city"), Some("Pune"));
    assert_eq!(payload.get("pincode"), Some("411001"));
    assert_eq!(payload.get("category"), Some("pets"));
    assert_eq!(payload.get("message"), Some(""));
}

#[tokio::test]
async fn test_rejected_submission_keeps_values_and_shows_generic_error() {
    let endpoint = MockEndpoint::new(Reply::Status(500));
    let app = common::create_test_app(endpoint.clone());

    let response = app
        .oneshot(common::post_form("/contact", &common::asha("view-500")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains(ERROR_MESSAGE));
    assert!(!body.contains("Message Sent!"));
    assert!(body.contains(r#"value="Asha""#));
    assert!(body.contains(r#"value="Pune""#));
    assert!(body.contains(r#"value="411001""#));
    assert!(body.contains(r#"<option value="pets" selected>"#));
    // The re-rendered form keeps its page view
    assert!(body.contains(r#"value="view-500""#));
    assert!(body.contains("Send Message"));

    assert_eq!(endpoint.calls(), 1);
}

#[tokio::test]
async fn test_transport_failure_renders_like_a_rejection() {
    let rejected = MockEndpoint::new(Reply::Status(500));
    let response = common::create_test_app(rejected.clone())
        .oneshot(common::post_form("/contact", &common::asha("view-same")))
        .await
        .unwrap();
    let rejected_status = response.status();
    let rejected_body = common::body_string(response).await;

    let disconnected = MockEndpoint::new(Reply::Disconnect);
    let response = common::create_test_app(disconnected.clone())
        .oneshot(common::post_form("/contact", &common::asha("view-same")))
        .await
        .unwrap();
    assert_eq!(response.status(), rejected_status);

    let body = common::body_string(response).await;
    assert!(body.contains(ERROR_MESSAGE));
    assert!(body.contains(r#"value="Asha""#));
    assert_eq!(body, rejected_body);

    assert_eq!(rejected.calls(), 1);
    assert_eq!(disconnected.calls(), 1);
}

#[tokio::test]
async fn test_retry_after_error_issues_a_new_request() {
    let endpoint = MockEndpoint::new(Reply::Status(400));
    let app = common::create_test_app(endpoint.clone());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(common::post_form("/contact", &common::asha("view-retry")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(endpoint.calls(), 2);
}

#[tokio::test]
async fn test_missing_category_is_rejected_without_sending() {
    let endpoint = MockEndpoint::new(Reply::Ok);
    let app = common::create_test_app(endpoint.clone());

    let fields: Vec<_> = common::asha("view-invalid")
        .into_iter()
        .filter(|(key, _)| *key != "category")
        .collect();

    let response = app
        .oneshot(common::post_form("/contact", &fields))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains("Please select a category"));
    assert!(body.contains(r#"value="Asha""#));
    assert!(!body.contains(ERROR_MESSAGE));

    assert_eq!(endpoint.calls(), 0);
}

#[tokio::test]
async fn test_malformed_email_is_rejected_without_sending() {
    let endpoint = MockEndpoint::new(Reply::Ok);
    let app = common::create_test_app(endpoint.clone());

    let fields: Vec<_> = common::asha("view-email")
        .into_iter()
        .map(|(key, value)| match key {
            "email" => (key, "asha"),
            _ => (key, value),
        })
        .collect();

    let response = app
        .oneshot(common::post_form("/contact", &fields))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains("Please enter a valid email address"));
    assert_eq!(endpoint.calls(), 0);
}

#[tokio::test]
async fn test_duplicate_submit_for_pending_view_is_refused() {
    let endpoint = Arc::new(GatedEndpoint::default());
    let app = common::create_test_app(endpoint.clone());

    let first = tokio::spawn(
        app.clone()
            .oneshot(common::post_form("/contact", &common::asha("view-busy"))),
    );
    endpoint.entered.notified().await;

    let response = app
        .clone()
        .oneshot(common::post_form("/contact", &common::asha("view-busy")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(response.headers()[header::RETRY_AFTER], "3");

    let body = common::body_string(response).await;
    assert!(body.contains("Sending..."));
    assert!(body.contains(" disabled"));
    // The refused page reloads into a usable form instead of staying disabled
    assert!(body.contains(r#"<meta http-equiv="refresh" content="3;url=/contact#order">"#));
    assert!(body.contains("Your message is already being sent."));
    assert!(body.contains(r#"<a href="/contact#order">start a new message</a>"#));

    endpoint.release.notify_one();
    let response = first.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::body_string(response).await.contains("Message Sent!"));

    assert_eq!(endpoint.calls(), 1);
}

#[tokio::test]
async fn test_view_is_released_after_completion() {
    let endpoint = MockEndpoint::new(Reply::Status(503));
    let app = common::create_test_app(endpoint.clone());

    let response = app
        .clone()
        .oneshot(common::post_form("/contact", &common::asha("view-again")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(common::post_form("/contact", &common::asha("view-again")))
        .await
        .unwrap();
    assert_ne!(response.status(), StatusCode::CONFLICT);
    assert_eq!(endpoint.calls(), 2);
}
