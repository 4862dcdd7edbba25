//! Integration tests for chat session endpoints.
//!
//! Drives the full router (auth, rate limiting, handlers, in-memory
//! storage) with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

use std::time::Duration;

use common::{app, app_configured, app_with, call, call_raw, ALICE, BOB};
use curhatin::adapters::ai::{MockAIProvider, MockError};
use curhatin::adapters::rate_limiter::RateLimitConfig;
use curhatin::config::{ChatConfig, ServerConfig};
use curhatin::domain::chat::AI_ERROR_FALLBACK;

async fn create_session(app: &Router, token: &str, counselor_id: Option<&str>) -> String {
    let body = match counselor_id {
        Some(id) => json!({ "counselor_id": id }),
        None => json!({}),
    };
    let (status, json) = call(app, "POST", "/api/chat-sessions", token, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", json);
    json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn ai_session_appends_user_message_and_reply() {
    let app = app(MockAIProvider::new().with_response("Aku di sini, cerita saja."));
    let id = create_session(&app, ALICE, None).await;

    let (status, json) = call(
        &app,
        "POST",
        &format!("/api/chat-sessions/{}/messages", id),
        ALICE,
        Some(json!({ "message": "halo" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], id.as_str());
    assert!(json["counselor_id"].is_null());
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "halo");
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["content"], "Aku di sini, cerita saja.");
}

#[tokio::test]
async fn counselor_session_gets_no_ai_reply() {
    let ai = MockAIProvider::new();
    let app = app(ai.clone());
    let id = create_session(&app, ALICE, Some("sarah-wijaya")).await;

    let (status, json) = call(
        &app,
        "POST",
        &format!("/api/chat-sessions/{}/messages", id),
        ALICE,
        Some(json!({ "message": "Selamat pagi, Bu" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["counselor_id"], "sarah-wijaya");
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    assert_eq!(ai.call_count(), 0);
}

#[tokio::test]
async fn generation_failure_appends_fallback_reply() {
    let app = app(MockAIProvider::new().with_error(MockError::Unavailable {
        message: "down".to_string(),
    }));
    let id = create_session(&app, ALICE, None).await;

    let (status, json) = call(
        &app,
        "POST",
        &format!("/api/chat-sessions/{}/messages", id),
        ALICE,
        Some(json!({ "message": "aku sedih" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1]["content"], AI_ERROR_FALLBACK);
}

#[tokio::test]
async fn unknown_counselor_is_rejected() {
    let app = app(MockAIProvider::new());
    let (status, json) = call(
        &app,
        "POST",
        "/api/chat-sessions",
        ALICE,
        Some(json!({ "counselor_id": "nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn other_users_session_is_not_found() {
    let app = app(MockAIProvider::new());
    let id = create_session(&app, ALICE, None).await;

    let (status, _) = call(&app, "GET", &format!("/api/chat-sessions/{}", id), BOB, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        "POST",
        &format!("/api/chat-sessions/{}/messages", id),
        BOB,
        Some(json!({ "message": "halo" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = call(&app, "GET", &format!("/api/chat-sessions/{}", id), ALICE, None).await;
    assert!(json["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_session_and_malformed_id() {
    let app = app(MockAIProvider::new());

    let (status, _) = call(
        &app,
        "GET",
        "/api/chat-sessions/00000000-0000-4000-8000-000000000000",
        ALICE,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "GET", "/api/chat-sessions/not-a-uuid", ALICE, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_message_is_rejected_without_change() {
    let app = app(MockAIProvider::new());
    let id = create_session(&app, ALICE, None).await;
    let uri = format!("/api/chat-sessions/{}/messages", id);

    let (status, _) = call(&app, "POST", &uri, ALICE, Some(json!({ "message": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "POST", &uri, ALICE, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = call(&app, "GET", &format!("/api/chat-sessions/{}", id), ALICE, None).await;
    assert!(json["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_only_returns_own_sessions() {
    let app = app(MockAIProvider::new());
    create_session(&app, ALICE, None).await;
    create_session(&app, ALICE, Some("rina-sari")).await;
    create_session(&app, BOB, None).await;

    let (status, json) = call(&app, "GET", "/api/chat-sessions", ALICE, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn chat_sends_are_rate_limited() {
    let limits = RateLimitConfig {
        chat_messages: 2,
        ..RateLimitConfig::default()
    };
    let app = app_with(MockAIProvider::new(), limits);
    let id = create_session(&app, ALICE, None).await;
    let uri = format!("/api/chat-sessions/{}/messages", id);

    for _ in 0..2 {
        let (status, _) = call(&app, "POST", &uri, ALICE, Some(json!({ "message": "halo" }))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = call(&app, "POST", &uri, ALICE, Some(json!({ "message": "halo" }))).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["code"], "RATE_LIMIT_EXCEEDED");

    let (_, json) = call(&app, "GET", &format!("/api/chat-sessions/{}", id), ALICE, None).await;
    assert_eq!(json["messages"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn concurrent_sends_keep_every_message() {
    let app = app(MockAIProvider::new());
    let id = create_session(&app, ALICE, None).await;
    let uri = format!("/api/chat-sessions/{}/messages", id);

    let sends = (0..4).map(|i| {
        let app = app.clone();
        let uri = uri.clone();
        tokio::spawn(async move {
            call(&app, "POST", &uri, ALICE, Some(json!({ "message": format!("pesan {}", i) }))).await
        })
    });
    for send in sends.collect::<Vec<_>>() {
        let (status, _) = send.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = call(&app, "GET", &format!("/api/chat-sessions/{}", id), ALICE, None).await;
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 8);
    for pair in messages.chunks(2) {
        assert_eq!(pair[0]["role"], "user");
        assert_eq!(pair[1]["role"], "assistant");
    }
}

#[tokio::test]
async fn bare_create_opens_ai_session() {
    let app = app(MockAIProvider::new());

    let (status, json) = call(&app, "POST", "/api/chat-sessions", ALICE, None).await;

    assert_eq!(status, StatusCode::CREATED, "{}", json);
    assert!(json["counselor_id"].is_null());
}

#[tokio::test]
async fn malformed_create_body_is_rejected() {
    let app = app(MockAIProvider::new());

    let (status, _) = call(
        &app,
        "POST",
        "/api/chat-sessions",
        ALICE,
        Some(json!({ "counselor_id": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call_raw(
        &app,
        "POST",
        "/api/chat-sessions",
        ALICE,
        Some("application/json"),
        r#"{"counselor_id": "rina"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = call(&app, "GET", "/api/chat-sessions", ALICE, None).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn slow_ai_reply_falls_back_before_request_timeout() {
    let chat = ChatConfig {
        reply_timeout_secs: 1,
        ..ChatConfig::default()
    };
    let server = ServerConfig {
        request_timeout_secs: 3,
        ..ServerConfig::default()
    };
    let app = app_configured(
        MockAIProvider::new().with_delay(Duration::from_secs(5)),
        RateLimitConfig::default(),
        chat,
        server,
    );
    let id = create_session(&app, ALICE, None).await;

    let (status, json) = call(
        &app,
        "POST",
        &format!("/api/chat-sessions/{}/messages", id),
        ALICE,
        Some(json!({ "message": "halo" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", json);

    let (_, json) = call(&app, "GET", &format!("/api/chat-sessions/{}", id), ALICE, None).await;
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"], "halo");
    assert_eq!(messages[1]["content"], AI_ERROR_FALLBACK);
}
