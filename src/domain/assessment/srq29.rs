//! SRQ-29 (Self-Reporting Questionnaire) scoring.
//!
//! The questionnaire is a fixed, ordered list of 29 yes/no symptom statements.
//! The score is the number of "yes" answers and maps onto four bands:
//!
//! | Score  | Band        |
//! |--------|-------------|
//! | 0–5    | `low`       |
//! | 6–12   | `moderate`  |
//! | 13–20  | `high`      |
//! | 21–29  | `very high` |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::AssessmentError;

/// Number of statements in the questionnaire.
pub const SRQ29_ITEM_COUNT: usize = 29;

/// The screening statements, in the order answers must be submitted.
pub const SRQ29_STATEMENTS: [&str; SRQ29_ITEM_COUNT] = [
    "Apakah Anda sering merasa sakit kepala?",
    "Apakah nafsu makan Anda berkurang?",
    "Apakah tidur Anda tidak nyenyak?",
    "Apakah Anda mudah takut?",
    "Apakah tangan Anda gemetar?",
    "Apakah Anda merasa tegang, cemas atau khawatir?",
    "Apakah pencernaan Anda terganggu?",
    "Apakah Anda sulit berpikir jernih?",
    "Apakah Anda merasa tidak bahagia?",
    "Apakah Anda lebih sering menangis?",
    "Apakah Anda sulit menikmati kegiatan sehari-hari?",
    "Apakah Anda sulit mengambil keputusan?",
    "Apakah pekerjaan sehari-hari Anda terganggu?",
    "Apakah Anda tidak mampu berperan serta dalam hidup?",
    "Apakah Anda kehilangan minat terhadap berbagai hal?",
    "Apakah Anda merasa tidak berguna?",
    "Apakah Anda mempunyai pikiran untuk mengakhiri hidup?",
    "Apakah Anda merasa lelah sepanjang waktu?",
    "Apakah perut Anda terasa tidak enak?",
    "Apakah Anda mudah lelah?",
    "Apakah Anda adalah orang yang mudah panik?",
    "Apakah Anda merasa tegang sepanjang waktu?",
    "Apakah Anda merasa khawatir berlebihan tentang sesuatu?",
    "Apakah Anda kurang tertarik pada berbagai hal?",
    "Apakah Anda merasa putus asa?",
    "Apakah Anda merasa sulit berkonsentrasi?",
    "Apakah aktivitas sehari-hari Anda berkurang?",
    "Apakah Anda kehilangan kemampuan untuk berpikir?",
    "Apakah masa depan Anda terasa suram dan tanpa harapan?",
];

/// Interpretation band for an SRQ-29 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl RiskBand {
    /// Selects the band for a score. Scores above 29 are treated as `VeryHigh`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=5 => RiskBand::Low,
            6..=12 => RiskBand::Moderate,
            13..=20 => RiskBand::High,
            _ => RiskBand::VeryHigh,
        }
    }

    /// Stable key used in API responses and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
            RiskBand::VeryHigh => "very high",
        }
    }

    /// Parses a stored band key.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(RiskBand::Low),
            "moderate" => Some(RiskBand::Moderate),
            "high" => Some(RiskBand::High),
            "very high" => Some(RiskBand::VeryHigh),
            _ => None,
        }
    }

    /// Human-readable interpretation shown to the user.
    pub fn description(&self) -> &'static str {
        match self {
            RiskBand::Low => {
                "Hasil menunjukkan tingkat stres dan masalah emosional yang rendah. \
                 Anda tampak memiliki kesehatan mental yang baik."
            }
            RiskBand::Moderate => {
                "Hasil menunjukkan tingkat stres sedang. Anda mungkin mengalami \
                 beberapa tekanan emosional yang perlu perhatian."
            }
            RiskBand::High => {
                "Hasil menunjukkan tingkat stres yang cukup tinggi. Disarankan untuk \
                 mencari dukungan dari konselor atau profesional kesehatan mental."
            }
            RiskBand::VeryHigh => {
                "Hasil menunjukkan tingkat stres yang tinggi. Sangat disarankan untuk \
                 segera berkonsultasi dengan profesional kesehatan mental."
            }
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a complete set of answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Srq29Score {
    /// Number of "yes" answers, 0–29.
    pub score: u8,
    /// Band selected by `score`.
    pub band: RiskBand,
}

/// Scores a complete set of SRQ-29 answers.
///
/// # Errors
///
/// - `InvalidAnswerCount` if `answers` does not contain exactly 29 entries
pub fn score_answers(answers: &[bool]) -> Result<Srq29Score, AssessmentError> {
    if answers.len() != SRQ29_ITEM_COUNT {
        return Err(AssessmentError::InvalidAnswerCount {
            expected: SRQ29_ITEM_COUNT,
            actual: answers.len(),
        });
    }

    let score = answers.iter().filter(|&&answer| answer).count() as u8;
    Ok(Srq29Score {
        score,
        band: RiskBand::from_score(score),
    })
}

/// Converts an untyped JSON payload into the answer vector.
///
/// Clients submit answers as a JSON array; every element must be a JSON
/// boolean. Numbers, strings and `null` are rejected rather than coerced.
///
/// # Errors
///
/// - `NotAnArray` if `value` is not an array
/// - `InvalidAnswerCount` if the array length is not 29
/// - `NonBooleanAnswer` for the first element that is not a boolean
pub fn parse_answers(value: &Value) -> Result<Vec<bool>, AssessmentError> {
    let items = value.as_array().ok_or(AssessmentError::NotAnArray)?;

    if items.len() != SRQ29_ITEM_COUNT {
        return Err(AssessmentError::InvalidAnswerCount {
            expected: SRQ29_ITEM_COUNT,
            actual: items.len(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_bool()
                .ok_or(AssessmentError::NonBooleanAnswer { index })
        })
        .collect()
}
