//! HTTP routes for assessment endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_assessments, list_questions, submit_assessment, AssessmentHandlers};

pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", get(list_assessments).post(submit_assessment))
        .route("/questions", get(list_questions))
        .with_state(handlers)
}
