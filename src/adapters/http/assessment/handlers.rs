//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{internal_error, json_rejection, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::assessment::{
    ListAssessmentsHandler, ListAssessmentsQuery, SubmitAssessmentCommand, SubmitAssessmentHandler,
};
use crate::domain::assessment::AssessmentError;

use super::dto::{questions, AssessmentResponse, SubmitAssessmentRequest};

#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
    list_handler: Arc<ListAssessmentsHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAssessmentHandler>,
        list_handler: Arc<ListAssessmentsHandler>,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
        }
    }
}

/// POST /api/assessments
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = SubmitAssessmentCommand {
        user_id: user.id,
        answers: req.answers,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(assessment) => (
            StatusCode::CREATED,
            Json(AssessmentResponse::from(&assessment)),
        )
            .into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments
pub async fn list_assessments(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListAssessmentsQuery { user_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(list) => {
            let response: Vec<AssessmentResponse> = list.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/questions
pub async fn list_questions(RequireAuth(_user): RequireAuth) -> Response {
    Json(questions()).into_response()
}

fn handle_assessment_error(error: AssessmentError) -> Response {
    match error {
        AssessmentError::Infrastructure(msg) => internal_error(&msg),
        other => ErrorResponse::new(other.code(), other.to_string())
            .into_response_with(StatusCode::BAD_REQUEST),
    }
}
