//! HTTP handlers for chat session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{internal_error, json_rejection, parse_id, ErrorResponse};
use crate::adapters::http::middleware::{RateLimitCheck, RequireAuth};
use crate::application::handlers::chat::{
    CreateChatSessionCommand, CreateChatSessionHandler, GetChatSessionHandler, GetChatSessionQuery,
    ListChatSessionsHandler, ListChatSessionsQuery, SendChatMessageCommand, SendChatMessageHandler,
};
use crate::domain::chat::ChatError;
use crate::domain::foundation::{ChatSessionId, CounselorId};

use super::dto::{ChatSessionResponse, CreateChatSessionRequest, SendMessageRequest};

#[derive(Clone)]
pub struct ChatHandlers {
    create_handler: Arc<CreateChatSessionHandler>,
    list_handler: Arc<ListChatSessionsHandler>,
    get_handler: Arc<GetChatSessionHandler>,
    send_handler: Arc<SendChatMessageHandler>,
    rate_check: RateLimitCheck,
}

impl ChatHandlers {
    pub fn new(
        create_handler: Arc<CreateChatSessionHandler>,
        list_handler: Arc<ListChatSessionsHandler>,
        get_handler: Arc<GetChatSessionHandler>,
        send_handler: Arc<SendChatMessageHandler>,
        rate_check: RateLimitCheck,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            send_handler,
            rate_check,
        }
    }
}

/// POST /api/chat-sessions
pub async fn create_chat_session(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateChatSessionRequest>, JsonRejection>,
) -> Response {
    // A bare POST opens an AI session; a body that is sent must parse.
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => CreateChatSessionRequest::default(),
        Err(rejection) => return json_rejection(rejection),
    };

    let counselor_id = match req.counselor_id.filter(|c| !c.trim().is_empty()) {
        Some(raw) => match CounselorId::new(raw) {
            Ok(id) => Some(id),
            Err(e) => {
                return ErrorResponse::validation(&e).into_response_with(StatusCode::BAD_REQUEST)
            }
        },
        None => None,
    };

    let cmd = CreateChatSessionCommand {
        user_id: user.id,
        counselor_id,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(ChatSessionResponse::from(&session)),
        )
            .into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chat-sessions
pub async fn list_chat_sessions(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListChatSessionsQuery { user_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(sessions) => {
            let response: Vec<ChatSessionResponse> = sessions.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chat-sessions/:id
pub async fn get_chat_session(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id: ChatSessionId = match parse_id(&session_id, "chat session") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetChatSessionQuery {
        session_id,
        user_id: user.id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(session) => Json(ChatSessionResponse::from(&session)).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// POST /api/chat-sessions/:id/messages
pub async fn send_chat_message(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Response {
    let session_id: ChatSessionId = match parse_id(&session_id, "chat session") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    if let Err(rejection) = handlers.rate_check.check_chat_messages(&user.id).await {
        return rejection.into_response();
    }

    let cmd = SendChatMessageCommand {
        session_id,
        user_id: user.id,
        message: req.message,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(session) => Json(ChatSessionResponse::from(&session)).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

fn handle_chat_error(error: ChatError) -> Response {
    let status = match &error {
        ChatError::NotFound(id) => {
            return ErrorResponse::not_found("Chat session", &id.to_string())
                .into_response_with(StatusCode::NOT_FOUND)
        }
        ChatError::Infrastructure(msg) => return internal_error(msg),
        ChatError::EmptyMessage
        | ChatError::MessageTooLong { .. }
        | ChatError::UnknownCounselor(_) => StatusCode::BAD_REQUEST,
        ChatError::Conflict(_) => StatusCode::CONFLICT,
    };

    ErrorResponse::new(error.code(), error.message()).into_response_with(status)
}
