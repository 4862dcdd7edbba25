//! Mood check-ins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{MoodId, Timestamp, UserId, ValidationError};

/// Maximum length of a mood note, in characters.
pub const MAX_NOTE_CHARS: usize = 1000;

/// How the user feels, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodKind {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    VerySad,
}

impl MoodKind {
    pub const ALL: [MoodKind; 5] = [
        MoodKind::VeryHappy,
        MoodKind::Happy,
        MoodKind::Neutral,
        MoodKind::Sad,
        MoodKind::VerySad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKind::VeryHappy => "very-happy",
            MoodKind::Happy => "happy",
            MoodKind::Neutral => "neutral",
            MoodKind::Sad => "sad",
            MoodKind::VerySad => "very-sad",
        }
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "mood",
                    "expected one of very-happy, happy, neutral, sad, very-sad",
                )
            })
    }
}

/// A single mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    id: MoodId,
    user_id: UserId,
    mood: MoodKind,
    note: Option<String>,
    created_at: Timestamp,
}

impl Mood {
    /// Records a check-in. Blank notes are stored as `None`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the note is longer than 1000 characters
    pub fn record(
        user_id: UserId,
        mood: MoodKind,
        note: Option<String>,
    ) -> Result<Self, ValidationError> {
        let note = note.filter(|n| !n.trim().is_empty());
        if let Some(n) = &note {
            let len = n.chars().count();
            if len > MAX_NOTE_CHARS {
                return Err(ValidationError::out_of_range(
                    "note",
                    0,
                    MAX_NOTE_CHARS as i64,
                    len as i64,
                ));
            }
        }

        Ok(Self {
            id: MoodId::new(),
            user_id,
            mood,
            note,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: MoodId,
        user_id: UserId,
        mood: MoodKind,
        note: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            mood,
            note,
            created_at,
        }
    }

    pub fn id(&self) -> &MoodId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn mood(&self) -> MoodKind {
        self.mood
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn mood_kind_parses_kebab_case() {
        assert_eq!("very-happy".parse::<MoodKind>().unwrap(), MoodKind::VeryHappy);
        assert_eq!("very-sad".parse::<MoodKind>().unwrap(), MoodKind::VerySad);
        assert!("ecstatic".parse::<MoodKind>().is_err());
        assert_eq!(
            serde_json::to_string(&MoodKind::VeryHappy).unwrap(),
            "\"very-happy\""
        );
    }

    #[test]
    fn blank_note_is_dropped() {
        let mood = Mood::record(user(), MoodKind::Happy, Some("  ".to_string())).unwrap();
        assert_eq!(mood.note(), None);
    }

    #[test]
    fn long_note_is_rejected() {
        let note = "a".repeat(MAX_NOTE_CHARS + 1);
        let result = Mood::record(user(), MoodKind::Sad, Some(note));
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn note_is_kept() {
        let mood = Mood::record(user(), MoodKind::Neutral, Some("capek".to_string())).unwrap();
        assert_eq!(mood.note(), Some("capek"));
        assert_eq!(mood.mood(), MoodKind::Neutral);
    }
}
