//! Personal journal entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{JournalEntryId, Timestamp, UserId, ValidationError};
use crate::domain::mood::MoodKind;

/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum content length, in characters.
pub const MAX_CONTENT_CHARS: usize = 20_000;

/// Partial update of a journal entry. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<MoodKind>,
}

impl JournalUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.mood.is_none()
    }
}

/// A journal entry owned by one user.
///
/// # Invariants
///
/// - `title` is 1-200 characters, not blank
/// - `content` is non-blank and at most 20000 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    id: JournalEntryId,
    user_id: UserId,
    title: String,
    content: String,
    mood: Option<MoodKind>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl JournalEntry {
    /// Creates a new entry.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `OutOfRange` if title or content break the length rules
    pub fn new(
        user_id: UserId,
        title: String,
        content: String,
        mood: Option<MoodKind>,
    ) -> Result<Self, ValidationError> {
        validate_text("title", &title, MAX_TITLE_CHARS)?;
        validate_text("content", &content, MAX_CONTENT_CHARS)?;

        let now = Timestamp::now();
        Ok(Self {
            id: JournalEntryId::new(),
            user_id,
            title,
            content,
            mood,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstitute(
        id: JournalEntryId,
        user_id: UserId,
        title: String,
        content: String,
        mood: Option<MoodKind>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            content,
            mood,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &JournalEntryId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mood(&self) -> Option<MoodKind> {
        self.mood
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Applies a partial update. All fields are validated before any is changed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `OutOfRange` if a supplied title or content is invalid
    pub fn apply(&mut self, update: JournalUpdate) -> Result<(), ValidationError> {
        if let Some(title) = &update.title {
            validate_text("title", title, MAX_TITLE_CHARS)?;
        }
        if let Some(content) = &update.content {
            validate_text("content", content, MAX_CONTENT_CHARS)?;
        }
        if update.is_empty() {
            return Ok(());
        }

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(mood) = update.mood {
            self.mood = Some(mood);
        }
        self.updated_at = Timestamp::now_after(&self.updated_at);
        Ok(())
    }
}

fn validate_text(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::out_of_range(field, 1, max as i64, len as i64));
    }
    Ok(())
}
