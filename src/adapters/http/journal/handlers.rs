//! HTTP handlers for journal endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    handle_record_error, json_rejection, parse_id, ErrorResponse,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::journal::{
    CreateJournalEntryCommand, CreateJournalEntryHandler, DeleteJournalEntryCommand,
    DeleteJournalEntryHandler, ListJournalEntriesHandler, ListJournalEntriesQuery,
    UpdateJournalEntryCommand, UpdateJournalEntryHandler,
};
use crate::domain::foundation::JournalEntryId;

use super::dto::{
    parse_mood, CreateJournalEntryRequest, JournalEntryResponse, UpdateJournalEntryRequest,
};

#[derive(Clone)]
pub struct JournalHandlers {
    create_handler: Arc<CreateJournalEntryHandler>,
    list_handler: Arc<ListJournalEntriesHandler>,
    update_handler: Arc<UpdateJournalEntryHandler>,
    delete_handler: Arc<DeleteJournalEntryHandler>,
}

impl JournalHandlers {
    pub fn new(
        create_handler: Arc<CreateJournalEntryHandler>,
        list_handler: Arc<ListJournalEntriesHandler>,
        update_handler: Arc<UpdateJournalEntryHandler>,
        delete_handler: Arc<DeleteJournalEntryHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            update_handler,
            delete_handler,
        }
    }
}

/// POST /api/journal
pub async fn create_journal_entry(
    State(handlers): State<JournalHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateJournalEntryRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    let mood = match parse_mood(req.mood) {
        Ok(mood) => mood,
        Err(e) => return ErrorResponse::validation(&e).into_response_with(StatusCode::BAD_REQUEST),
    };

    let cmd = CreateJournalEntryCommand {
        user_id: user.id,
        title: req.title,
        content: req.content,
        mood,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(JournalEntryResponse::from(&entry)),
        )
            .into_response(),
        Err(e) => handle_record_error(e),
    }
}

/// GET /api/journal
pub async fn list_journal_entries(
    State(handlers): State<JournalHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListJournalEntriesQuery { user_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(entries) => {
            let response: Vec<JournalEntryResponse> = entries.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => handle_record_error(e),
    }
}

/// PUT /api/journal/:id
pub async fn update_journal_entry(
    State(handlers): State<JournalHandlers>,
    RequireAuth(user): RequireAuth,
    Path(entry_id): Path<String>,
    payload: Result<Json<UpdateJournalEntryRequest>, JsonRejection>,
) -> Response {
    let entry_id: JournalEntryId = match parse_id(&entry_id, "journal entry") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    let update = match req.into_update() {
        Ok(update) => update,
        Err(e) => return ErrorResponse::validation(&e).into_response_with(StatusCode::BAD_REQUEST),
    };

    let cmd = UpdateJournalEntryCommand {
        entry_id,
        user_id: user.id,
        update,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(entry) => Json(JournalEntryResponse::from(&entry)).into_response(),
        Err(e) => handle_record_error(e),
    }
}

/// DELETE /api/journal/:id
pub async fn delete_journal_entry(
    State(handlers): State<JournalHandlers>,
    RequireAuth(user): RequireAuth,
    Path(entry_id): Path<String>,
) -> Response {
    let entry_id: JournalEntryId = match parse_id(&entry_id, "journal entry") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteJournalEntryCommand {
        entry_id,
        user_id: user.id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_record_error(e),
    }
}
