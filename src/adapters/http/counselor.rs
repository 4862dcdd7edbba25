//! Counselor directory endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::adapters::http::error::{handle_record_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::counselor::{
    GetCounselorHandler, GetCounselorQuery, ListCounselorsHandler,
};
use crate::domain::foundation::CounselorId;

#[derive(Clone)]
pub struct CounselorHandlers {
    list_handler: Arc<ListCounselorsHandler>,
    get_handler: Arc<GetCounselorHandler>,
}

impl CounselorHandlers {
    pub fn new(list_handler: Arc<ListCounselorsHandler>, get_handler: Arc<GetCounselorHandler>) -> Self {
        Self {
            list_handler,
            get_handler,
        }
    }
}

/// GET /api/counselors
pub async fn list_counselors(
    State(handlers): State<CounselorHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle().await {
        Ok(counselors) => Json(counselors).into_response(),
        Err(e) => handle_record_error(e),
    }
}

/// GET /api/counselors/:id
pub async fn get_counselor(
    State(handlers): State<CounselorHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(counselor_id): Path<String>,
) -> Response {
    let counselor_id = match CounselorId::new(counselor_id) {
        Ok(id) => id,
        Err(e) => return ErrorResponse::validation(&e).into_response_with(StatusCode::BAD_REQUEST),
    };

    match handlers.get_handler.handle(GetCounselorQuery { counselor_id }).await {
        Ok(counselor) => Json(counselor).into_response(),
        Err(e) => handle_record_error(e),
    }
}

pub fn counselor_routes(handlers: CounselorHandlers) -> Router {
    Router::new()
        .route("/", get(list_counselors))
        .route("/:id", get(get_counselor))
        .with_state(handlers)
}
