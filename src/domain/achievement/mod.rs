//! Unlocked achievements. Display state only; nothing on the server
//! decides when an achievement unlocks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AchievementId, Timestamp, UserId, ValidationError};

/// An achievement a user has unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    id: AchievementId,
    user_id: UserId,
    /// Machine-readable kind, e.g. `first_chat` or `mood_streak`.
    kind: String,
    title: String,
    description: String,
    icon: String,
    unlocked_at: Timestamp,
}

impl Achievement {
    /// Records an achievement as unlocked now.
    pub fn unlock(
        user_id: UserId,
        kind: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let kind = kind.into();
        let title = title.into();
        if kind.trim().is_empty() {
            return Err(ValidationError::empty_field("kind"));
        }
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        Ok(Self {
            id: AchievementId::new(),
            user_id,
            kind,
            title,
            description: description.into(),
            icon: icon.into(),
            unlocked_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: AchievementId,
        user_id: UserId,
        kind: String,
        title: String,
        description: String,
        icon: String,
        unlocked_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            title,
            description,
            icon,
            unlocked_at,
        }
    }

    pub fn id(&self) -> &AchievementId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn unlocked_at(&self) -> &Timestamp {
        &self.unlocked_at
    }
}
