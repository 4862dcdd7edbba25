//! Rate limiting middleware for axum.
//!
//! The middleware checks, in order:
//! 1. Per-IP budget
//! 2. Per-user budget, when the request is authenticated
//!
//! Chat message sends carry an extra per-user budget checked by the chat
//! handler through `RateLimitCheck`.
//!
//! Headers on every limited response:
//! - `X-RateLimit-Limit`, `X-RateLimit-Remaining`, `X-RateLimit-Reset`
//! - `Retry-After` on 429
//!
//! Limiter outages fail open: the request proceeds and a warning is logged.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::RETRY_AFTER, HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthenticatedUser, UserId};
use crate::ports::{RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter};

pub type RateLimiterState = Arc<dyn RateLimiter>;

pub mod headers {
    use super::HeaderName;

    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    pub static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client_ip = extract_client_ip(request.headers(), connect_info.as_ref());
    let user = request.extensions().get::<AuthenticatedUser>().cloned();

    let mut tightest: Option<RateLimitStatus> = None;

    if let Some(ip) = &client_ip {
        match check(&limiter, RateLimitKey::ip(ip)).await {
            Ok(status) => tightest = status,
            Err(rejection) => return rejection.into_response(),
        }
    }

    if let Some(user) = &user {
        match check(&limiter, RateLimitKey::user(&user.id)).await {
            Ok(Some(status)) => {
                if tightest.as_ref().map_or(true, |t| status.remaining < t.remaining) {
                    tightest = Some(status);
                }
            }
            Ok(None) => {}
            Err(rejection) => return rejection.into_response(),
        }
    }

    let mut response = next.run(request).await;
    if let Some(status) = tightest {
        add_rate_limit_headers(response.headers_mut(), &status);
    }
    response
}

/// `Ok(None)` when the limiter is unavailable.
async fn check(
    limiter: &RateLimiterState,
    key: RateLimitKey,
) -> Result<Option<RateLimitStatus>, RateLimitRejection> {
    match limiter.check(key).await {
        Ok(RateLimitResult::Allowed(status)) => Ok(Some(status)),
        Ok(RateLimitResult::Denied(denied)) => Err(RateLimitRejection {
            limit: denied.limit,
            retry_after_secs: denied.retry_after_secs,
            message: denied.message,
        }),
        Err(e) => {
            tracing::warn!("Rate limiter unavailable: {}", e);
            Ok(None)
        }
    }
}

/// Client IP from `X-Forwarded-For` (first hop), `X-Real-IP`, then the socket.
fn extract_client_ip(
    headers: &HeaderMap,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());
    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|h| h.to_str().ok()) {
        return Some(real_ip.trim().to_string());
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

fn add_rate_limit_headers(headers: &mut HeaderMap, status: &RateLimitStatus) {
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(status.limit));
    headers.insert(
        headers::X_RATELIMIT_REMAINING.clone(),
        HeaderValue::from(status.remaining),
    );
    headers.insert(
        headers::X_RATELIMIT_RESET.clone(),
        HeaderValue::from(status.reset_at.as_unix_secs()),
    );
}

/// Per-resource check used inside handlers.
#[derive(Clone)]
pub struct RateLimitCheck {
    limiter: RateLimiterState,
}

impl RateLimitCheck {
    pub fn new(limiter: RateLimiterState) -> Self {
        Self { limiter }
    }

    pub async fn check_chat_messages(&self, user_id: &UserId) -> Result<(), RateLimitRejection> {
        check(&self.limiter, RateLimitKey::chat_messages(user_id))
            .await
            .map(|_| ())
    }
}

#[derive(Debug, Clone)]
pub struct RateLimitRejection {
    pub limit: u32,
    pub retry_after_secs: u32,
    pub message: String,
}

impl IntoResponse for RateLimitRejection {
    fn into_response(self) -> Response {
        let mut response = ErrorResponse::new("RATE_LIMIT_EXCEEDED", self.message)
            .with_details(serde_json::json!({ "retry_after_secs": self.retry_after_secs }))
            .into_response_with(StatusCode::TOO_MANY_REQUESTS);

        let headers = response.headers_mut();
        headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(self.limit));
        headers.insert(headers::X_RATELIMIT_REMAINING.clone(), HeaderValue::from(0u32));
        headers.insert(RETRY_AFTER, HeaderValue::from(self.retry_after_secs));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rate_limiter::{InMemoryRateLimiter, RateLimitConfig};
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn limiter(per_ip: u32, chat_messages: u32) -> RateLimiterState {
        Arc::new(InMemoryRateLimiter::new(RateLimitConfig {
            per_ip,
            chat_messages,
            ..Default::default()
        }))
    }

    fn app(limiter: RateLimiterState) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware))
    }

    fn from_ip(ip: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri("/ping")
            .header("X-Forwarded-For", ip)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn forwarded_for_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("1.2.3.4, 5.6.7.8"));
        headers.insert("x-real-ip", HeaderValue::from_static("9.9.9.9"));
        assert_eq!(extract_client_ip(&headers, None), Some("1.2.3.4".to_string()));
    }

    #[test]
    fn falls_back_to_real_ip_then_socket() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("9.9.9.9"));
        assert_eq!(extract_client_ip(&headers, None), Some("9.9.9.9".to_string()));

        let socket = ConnectInfo("10.0.0.1:4000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            extract_client_ip(&HeaderMap::new(), Some(&socket)),
            Some("10.0.0.1".to_string())
        );
        assert_eq!(extract_client_ip(&HeaderMap::new(), None), None);
    }

    #[tokio::test]
    async fn allowed_requests_carry_headers() {
        let response = app(limiter(5, 5)).oneshot(from_ip("1.1.1.1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[&headers::X_RATELIMIT_LIMIT], "5");
        assert_eq!(response.headers()[&headers::X_RATELIMIT_REMAINING], "4");
    }

    #[tokio::test]
    async fn exceeding_ip_budget_returns_429_with_retry_after() {
        let limiter = limiter(2, 5);
        for _ in 0..2 {
            let ok = app(limiter.clone()).oneshot(from_ip("2.2.2.2")).await.unwrap();
            assert_eq!(ok.status(), StatusCode::OK);
        }

        let denied = app(limiter.clone()).oneshot(from_ip("2.2.2.2")).await.unwrap();
        assert_eq!(denied.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(denied.headers().contains_key(RETRY_AFTER));

        let other_ip = app(limiter).oneshot(from_ip("3.3.3.3")).await.unwrap();
        assert_eq!(other_ip.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn chat_message_budget_is_separate_per_user() {
        let check = RateLimitCheck::new(limiter(100, 1));
        let ayu = UserId::new("ayu").unwrap();

        assert!(check.check_chat_messages(&ayu).await.is_ok());
        let rejection = check.check_chat_messages(&ayu).await.unwrap_err();
        assert_eq!(rejection.limit, 1);
        assert!(check
            .check_chat_messages(&UserId::new("budi").unwrap())
            .await
            .is_ok());
    }
}
