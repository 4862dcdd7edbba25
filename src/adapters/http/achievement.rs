//! Achievement listing. Achievements are display state; nothing here
//! unlocks them.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::handle_record_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::achievement::{ListAchievementsHandler, ListAchievementsQuery};
use crate::domain::achievement::Achievement;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementResponse {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: String,
}

impl From<&Achievement> for AchievementResponse {
    fn from(achievement: &Achievement) -> Self {
        Self {
            id: achievement.id().to_string(),
            kind: achievement.kind().to_string(),
            title: achievement.title().to_string(),
            description: achievement.description().to_string(),
            icon: achievement.icon().to_string(),
            unlocked_at: achievement.unlocked_at().to_rfc3339(),
        }
    }
}

/// GET /api/achievements
pub async fn list_achievements(
    State(handler): State<Arc<ListAchievementsHandler>>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handler.handle(ListAchievementsQuery { user_id: user.id }).await {
        Ok(achievements) => {
            let response: Vec<AchievementResponse> = achievements.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => handle_record_error(e),
    }
}

pub fn achievement_routes(handler: Arc<ListAchievementsHandler>) -> Router {
    Router::new()
        .route("/", get(list_achievements))
        .with_state(handler)
}
