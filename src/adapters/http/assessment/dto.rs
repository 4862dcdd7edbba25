//! Request and response shapes for assessment endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::assessment::{Assessment, SRQ29_STATEMENTS};

/// `answers` stays untyped so non-boolean elements can be reported by index.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub answers: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub score: u8,
    /// Band key: `low`, `moderate`, `high` or `very high`.
    pub interpretation: String,
    /// Band description shown to the user.
    pub summary: String,
    pub answers: Vec<bool>,
    pub created_at: String,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id().to_string(),
            score: assessment.score(),
            interpretation: assessment.band().as_str().to_string(),
            summary: assessment.summary().to_string(),
            answers: assessment.answers().to_vec(),
            created_at: assessment.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// 1-based position in the questionnaire.
    pub number: usize,
    pub text: String,
}

pub fn questions() -> Vec<QuestionResponse> {
    SRQ29_STATEMENTS
        .iter()
        .enumerate()
        .map(|(i, text)| QuestionResponse {
            number: i + 1,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn response_exposes_band_key_and_summary() {
        let assessment =
            Assessment::record(UserId::new("user-1").unwrap(), vec![true; 29]).unwrap();
        let response = AssessmentResponse::from(&assessment);

        assert_eq!(response.score, 29);
        assert_eq!(response.interpretation, "very high");
        assert_eq!(response.summary, assessment.band().description());
        assert_eq!(response.answers.len(), 29);
    }

    #[test]
    fn questions_are_numbered_from_one() {
        let list = questions();
        assert_eq!(list.len(), 29);
        assert_eq!(list[0].number, 1);
        assert_eq!(list[28].number, 29);
    }

    #[test]
    fn missing_answers_deserialize_as_null() {
        let req: SubmitAssessmentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.answers.is_null());
    }
}
