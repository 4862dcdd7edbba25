//! Shared router harness for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use curhatin::adapters::ai::MockAIProvider;
use curhatin::adapters::auth::MockSessionValidator;
use curhatin::adapters::http::{build_router, AppServices};
use curhatin::adapters::rate_limiter::{InMemoryRateLimiter, RateLimitConfig};
use curhatin::config::{ChatConfig, ServerConfig};

pub const ALICE: &str = "alice-token";
pub const BOB: &str = "bob-token";

/// Router over in-memory storage with two known users.
pub fn app_with(ai: MockAIProvider, limits: RateLimitConfig) -> Router {
    app_configured(ai, limits, ChatConfig::default(), ServerConfig::default())
}

pub fn app_configured(
    ai: MockAIProvider,
    limits: RateLimitConfig,
    chat: ChatConfig,
    server: ServerConfig,
) -> Router {
    let validator = MockSessionValidator::new()
        .with_test_user(ALICE, "alice")
        .with_test_user(BOB, "bob");
    let services = AppServices::in_memory(
        Arc::new(validator),
        Arc::new(InMemoryRateLimiter::new(limits)),
        Arc::new(ai),
        chat,
    );
    build_router(services, &server)
}

pub fn app(ai: MockAIProvider) -> Router {
    app_with(ai, RateLimitConfig::default())
}

/// Sends one request and returns the status and decoded JSON body
/// (`Null` for empty bodies).
pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    match body {
        Some(json) => {
            call_raw(app, method, uri, token, Some("application/json"), &json.to_string()).await
        }
        None => call_raw(app, method, uri, token, None, "").await,
    }
}

/// Like `call`, with a literal body and optional content type.
pub async fn call_raw(
    app: &Router,
    method: &str,
    uri: &str,
    token: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token));
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
