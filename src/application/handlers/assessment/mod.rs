//! SRQ-29 assessment handlers.

mod list_assessments;
mod submit_assessment;

pub use list_assessments::{ListAssessmentsHandler, ListAssessmentsQuery};
pub use submit_assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler};
