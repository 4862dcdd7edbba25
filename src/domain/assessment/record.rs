//! Stored SRQ-29 assessment result.

use serde::{Deserialize, Serialize};

use super::srq29::{score_answers, RiskBand};
use super::AssessmentError;
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};

/// A completed SRQ-29 assessment.
///
/// # Invariants
///
/// - `answers` has exactly 29 entries
/// - `score` equals the number of `true` answers
/// - `band` is the band selected by `score`
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    user_id: UserId,
    answers: Vec<bool>,
    score: u8,
    band: RiskBand,
    created_at: Timestamp,
}

impl Assessment {
    /// Scores `answers` and records the result for `user_id`.
    ///
    /// # Errors
    ///
    /// - `InvalidAnswerCount` if `answers` does not have 29 entries
    pub fn record(user_id: UserId, answers: Vec<bool>) -> Result<Self, AssessmentError> {
        let result = score_answers(&answers)?;
        Ok(Self {
            id: AssessmentId::new(),
            user_id,
            answers,
            score: result.score,
            band: result.band,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute an assessment from persistence.
    pub fn reconstitute(
        id: AssessmentId,
        user_id: UserId,
        answers: Vec<bool>,
        score: u8,
        band: RiskBand,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            answers,
            score,
            band,
            created_at,
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn band(&self) -> RiskBand {
        self.band
    }

    /// Returns the interpretation text for this result.
    pub fn summary(&self) -> &'static str {
        self.band.description()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn record_scores_answers() {
        let mut answers = vec![false; 29];
        answers[..13].iter_mut().for_each(|a| *a = true);

        let assessment = Assessment::record(user(), answers).unwrap();

        assert_eq!(assessment.score(), 13);
        assert_eq!(assessment.band(), RiskBand::High);
        assert_eq!(assessment.summary(), RiskBand::High.description());
        assert_eq!(assessment.answers().len(), 29);
        assert!(assessment.is_owner(&user()));
    }

    #[test]
    fn record_rejects_short_answer_list() {
        let result = Assessment::record(user(), vec![true; 28]);
        assert!(matches!(
            result,
            Err(AssessmentError::InvalidAnswerCount { actual: 28, .. })
        ));
    }
}
