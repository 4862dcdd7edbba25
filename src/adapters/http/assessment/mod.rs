//! HTTP adapter for SRQ-29 assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AssessmentResponse, QuestionResponse, SubmitAssessmentRequest};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
