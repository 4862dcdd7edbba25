//! SubmitAssessmentHandler - Scores and stores an SRQ-29 submission.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::assessment::{parse_answers, Assessment, AssessmentError};
use crate::domain::foundation::UserId;
use crate::ports::AssessmentRepository;

/// Command carrying the raw answer payload. The payload is validated here so
/// non-boolean elements are rejected rather than coerced.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user_id: UserId,
    pub answers: Value,
}

pub struct SubmitAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl SubmitAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, cmd), fields(user_id = %cmd.user_id))]
    pub async fn handle(&self, cmd: SubmitAssessmentCommand) -> Result<Assessment, AssessmentError> {
        let answers = parse_answers(&cmd.answers)?;
        let assessment = Assessment::record(cmd.user_id, answers)?;

        self.repository.save(&assessment).await?;

        tracing::info!(
            assessment_id = %assessment.id(),
            score = assessment.score(),
            band = %assessment.band(),
            "Assessment recorded"
        );
        Ok(assessment)
    }
}
