//! SRQ-29 mental-health self-assessment.
//!
//! - `srq29` - Statements, scorer and interpretation bands
//! - `record` - The stored `Assessment`

mod errors;
mod record;
mod srq29;

pub use errors::AssessmentError;
pub use record::Assessment;
pub use srq29::{
    parse_answers, score_answers, RiskBand, Srq29Score, SRQ29_ITEM_COUNT, SRQ29_STATEMENTS,
};
