//! JSON error body shared by every endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, RecordError, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn validation(err: &ValidationError) -> Self {
        Self::new(ErrorCode::ValidationFailed, err.to_string())
            .with_details(serde_json::json!({ "field": err.field() }))
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Malformed or missing JSON bodies become a 400 in the standard shape.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    ErrorResponse::bad_request(rejection.body_text()).into_response_with(StatusCode::BAD_REQUEST)
}

/// Parses a path id, answering 400 when it is malformed.
pub fn parse_id<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, Response> {
    raw.parse::<T>().map_err(|_| {
        ErrorResponse::bad_request(format!("Invalid {} ID", what))
            .into_response_with(StatusCode::BAD_REQUEST)
    })
}

/// Storage failures are logged in full and reported without detail.
pub fn internal_error(message: &str) -> Response {
    tracing::error!(error = %message, "Request failed");
    ErrorResponse::internal("Internal server error")
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn handle_record_error(error: RecordError) -> Response {
    match error {
        RecordError::NotFound { kind, id } => {
            ErrorResponse::not_found(kind, &id).into_response_with(StatusCode::NOT_FOUND)
        }
        RecordError::Validation(err) => {
            ErrorResponse::validation(&err).into_response_with(StatusCode::BAD_REQUEST)
        }
        RecordError::Infrastructure(msg) => internal_error(&msg),
    }
}
