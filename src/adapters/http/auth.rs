//! Identity of the caller, as read from the bearer token.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::adapters::http::middleware::RequireAuth;
use crate::domain::foundation::AuthenticatedUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: String,
    pub email: Option<String>,
    pub display_name: String,
}

impl From<&AuthenticatedUser> for MeResponse {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            display_name: user.display_name_or_fallback().to_string(),
        }
    }
}

/// GET /api/auth/me
pub async fn me(RequireAuth(user): RequireAuth) -> Json<MeResponse> {
    Json(MeResponse::from(&user))
}

pub fn auth_routes() -> Router {
    Router::new().route("/me", get(me))
}
