//! Request and response shapes for journal endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::journal::{JournalEntry, JournalUpdate};
use crate::domain::mood::MoodKind;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJournalEntryRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJournalEntryRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
}

impl UpdateJournalEntryRequest {
    pub fn into_update(self) -> Result<JournalUpdate, ValidationError> {
        Ok(JournalUpdate {
            title: self.title,
            content: self.content,
            mood: parse_mood(self.mood)?,
        })
    }
}

/// Blank strings mean "no mood".
pub fn parse_mood(raw: Option<String>) -> Result<Option<MoodKind>, ValidationError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntryResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&JournalEntry> for JournalEntryResponse {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            title: entry.title().to_string(),
            content: entry.content().to_string(),
            mood: entry.mood().map(|m| m.as_str().to_string()),
            created_at: entry.created_at().to_rfc3339(),
            updated_at: entry.updated_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_mood_is_none() {
        assert_eq!(parse_mood(None).unwrap(), None);
        assert_eq!(parse_mood(Some("  ".to_string())).unwrap(), None);
        assert_eq!(
            parse_mood(Some("sad".to_string())).unwrap(),
            Some(MoodKind::Sad)
        );
        assert!(parse_mood(Some("grumpy".to_string())).is_err());
    }

    #[test]
    fn update_request_keeps_absent_fields_empty() {
        let req: UpdateJournalEntryRequest =
            serde_json::from_str(r#"{"content":"baru"}"#).unwrap();
        let update = req.into_update().unwrap();
        assert_eq!(update.title, None);
        assert_eq!(update.content.as_deref(), Some("baru"));
        assert_eq!(update.mood, None);
    }
}
