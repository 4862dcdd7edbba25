//! Mood check-in endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::{handle_record_error, json_rejection, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::mood::{
    ListMoodsHandler, ListMoodsQuery, RecordMoodCommand, RecordMoodHandler,
};
use crate::domain::mood::{Mood, MoodKind};

#[derive(Debug, Clone, Deserialize)]
pub struct RecordMoodRequest {
    pub mood: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResponse {
    pub id: String,
    pub mood: String,
    pub note: Option<String>,
    pub created_at: String,
}

impl From<&Mood> for MoodResponse {
    fn from(mood: &Mood) -> Self {
        Self {
            id: mood.id().to_string(),
            mood: mood.mood().as_str().to_string(),
            note: mood.note().map(str::to_string),
            created_at: mood.created_at().to_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct MoodHandlers {
    record_handler: Arc<RecordMoodHandler>,
    list_handler: Arc<ListMoodsHandler>,
}

impl MoodHandlers {
    pub fn new(record_handler: Arc<RecordMoodHandler>, list_handler: Arc<ListMoodsHandler>) -> Self {
        Self {
            record_handler,
            list_handler,
        }
    }
}

/// POST /api/moods
pub async fn record_mood(
    State(handlers): State<MoodHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<RecordMoodRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    let mood: MoodKind = match req.mood.trim().parse() {
        Ok(mood) => mood,
        Err(e) => return ErrorResponse::validation(&e).into_response_with(StatusCode::BAD_REQUEST),
    };

    let cmd = RecordMoodCommand {
        user_id: user.id,
        mood,
        note: req.note,
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(mood) => (StatusCode::CREATED, Json(MoodResponse::from(&mood))).into_response(),
        Err(e) => handle_record_error(e),
    }
}

/// GET /api/moods
pub async fn list_moods(
    State(handlers): State<MoodHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle(ListMoodsQuery { user_id: user.id }).await {
        Ok(moods) => {
            let response: Vec<MoodResponse> = moods.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => handle_record_error(e),
    }
}

pub fn mood_routes(handlers: MoodHandlers) -> Router {
    Router::new()
        .route("/", get(list_moods).post(record_mood))
        .with_state(handlers)
}
