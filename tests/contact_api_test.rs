use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio::core::contact::{ContactService, Mailbox};
use folio::{build_router, AppState, LocalAssetStore, Profile, ResendSender};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::util::ServiceExt;

fn profile() -> Profile {
    Profile::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/profile.toml")).unwrap()
}

fn mailbox() -> Mailbox {
    Mailbox {
        from: "onboarding@resend.dev".to_string(),
        to: "owner@example.com".to_string(),
    }
}

fn app_with(contact: ContactService, public: &TempDir) -> axum::Router {
    build_router(AppState::new(
        profile(),
        LocalAssetStore::new(public.path()),
        contact,
    ))
}

fn app_for(server: &MockServer, public: &TempDir) -> axum::Router {
    let sender = ResendSender::new(server.base_url(), "re_test", Duration::from_secs(5)).unwrap();
    app_with(ContactService::new(Arc::new(sender), mailbox()), public)
}

fn post_contact(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_contact_success_relays_once() -> Result<()> {
    let public = TempDir::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .header("authorization", "Bearer re_test")
            .body_contains("Contact Form: Visitor")
            .body_contains("owner@example.com");
        then.status(200).json_body(json!({"id": "email_123"}));
    });

    let response = app_for(&server, &public)
        .oneshot(post_contact(json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": "Hello there"
        })))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["message"], "Message sent successfully");
    mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_empty_message_is_rejected_without_calling_provider() -> Result<()> {
    let public = TempDir::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200);
    });

    let response = app_for(&server, &public)
        .oneshot(post_contact(json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": ""
        })))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "All fields are required");
    mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_missing_field_in_body_is_rejected() -> Result<()> {
    let public = TempDir::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200);
    });

    let response = app_for(&server, &public)
        .oneshot(post_contact(json!({ "name": "Visitor", "message": "hi" })))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "All fields are required");
    mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_null_field_in_body_is_rejected_as_missing() -> Result<()> {
    let public = TempDir::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200);
    });

    let response = app_for(&server, &public)
        .oneshot(post_contact(json!({
            "name": null,
            "email": "visitor@example.com",
            "message": "hi"
        })))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "All fields are required");
    mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_malformed_email_is_rejected_without_calling_provider() -> Result<()> {
    let public = TempDir::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200);
    });

    let response = app_for(&server, &public)
        .oneshot(post_contact(json!({
            "name": "Visitor",
            "email": "not-an-email",
            "message": "hi"
        })))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "Invalid email address");
    mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_provider_failure_is_reported_and_not_retried() -> Result<()> {
    let public = TempDir::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(422)
            .json_body(json!({"statusCode": 422, "message": "Invalid `from` field"}));
    });

    let response = app_for(&server, &public)
        .oneshot(post_contact(json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": "hi"
        })))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = read_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Failed to send email: Invalid `from` field"));
    mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_service_reports_fixed_message() -> Result<()> {
    let public = TempDir::new()?;
    let app = app_with(ContactService::unconfigured(mailbox()), &public);

    let response = app
        .oneshot(post_contact(json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": "hi"
        })))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json(response).await["error"],
        "Email service is not configured. Please contact the site administrator."
    );
    Ok(())
}

#[tokio::test]
async fn test_unparsable_body_is_bad_request() -> Result<()> {
    let public = TempDir::new()?;
    let app = app_with(ContactService::unconfigured(mailbox()), &public);

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "Invalid request body");
    Ok(())
}
