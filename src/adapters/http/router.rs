//! Assembles every endpoint into one axum `Router`.
//!
//! ```text
//! /health                      (no auth)
//! /api/*   auth_middleware → rate_limit_middleware → handler
//! ```

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use http::{HeaderValue, Method};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::memory::{
    InMemoryAchievementRepository, InMemoryAssessmentRepository, InMemoryChatSessionRepository,
    InMemoryCounselorDirectory, InMemoryJournalRepository, InMemoryMoodRepository,
};
use crate::application::handlers::achievement::ListAchievementsHandler;
use crate::application::handlers::assessment::{ListAssessmentsHandler, SubmitAssessmentHandler};
use crate::application::handlers::chat::{
    CreateChatSessionHandler, GetChatSessionHandler, ListChatSessionsHandler,
    SendChatMessageHandler, SessionLocks,
};
use crate::application::handlers::counselor::{GetCounselorHandler, ListCounselorsHandler};
use crate::application::handlers::journal::{
    CreateJournalEntryHandler, DeleteJournalEntryHandler, ListJournalEntriesHandler,
    UpdateJournalEntryHandler,
};
use crate::application::handlers::mood::{ListMoodsHandler, RecordMoodHandler};
use crate::config::{ChatConfig, ServerConfig};
use crate::ports::{
    AIProvider, AchievementRepository, AssessmentRepository, ChatSessionRepository,
    CounselorDirectory, JournalRepository, MoodRepository, RateLimiter, SessionValidator,
};

use super::achievement::achievement_routes;
use super::assessment::{assessment_routes, AssessmentHandlers};
use super::auth::auth_routes;
use super::chat::{chat_routes, ChatHandlers};
use super::counselor::{counselor_routes, CounselorHandlers};
use super::journal::{journal_routes, JournalHandlers};
use super::middleware::{auth_middleware, rate_limit_middleware, RateLimitCheck};
use super::mood::{mood_routes, MoodHandlers};

/// Ports the HTTP layer is wired against.
#[derive(Clone)]
pub struct AppServices {
    pub session_validator: Arc<dyn SessionValidator>,
    pub rate_limiter: Arc<dyn RateLimiter>,
    pub ai_provider: Arc<dyn AIProvider>,
    pub chat_sessions: Arc<dyn ChatSessionRepository>,
    pub assessments: Arc<dyn AssessmentRepository>,
    pub moods: Arc<dyn MoodRepository>,
    pub journal: Arc<dyn JournalRepository>,
    pub counselors: Arc<dyn CounselorDirectory>,
    pub achievements: Arc<dyn AchievementRepository>,
    pub chat: ChatConfig,
}

impl AppServices {
    /// Services backed by the in-memory repositories and the seeded
    /// counselor directory.
    pub fn in_memory(
        session_validator: Arc<dyn SessionValidator>,
        rate_limiter: Arc<dyn RateLimiter>,
        ai_provider: Arc<dyn AIProvider>,
        chat: ChatConfig,
    ) -> Self {
        Self {
            session_validator,
            rate_limiter,
            ai_provider,
            chat_sessions: Arc::new(InMemoryChatSessionRepository::new()),
            assessments: Arc::new(InMemoryAssessmentRepository::new()),
            moods: Arc::new(InMemoryMoodRepository::new()),
            journal: Arc::new(InMemoryJournalRepository::new()),
            counselors: Arc::new(InMemoryCounselorDirectory::seeded()),
            achievements: Arc::new(InMemoryAchievementRepository::new()),
            chat,
        }
    }
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Routes under `/api`, without the auth and rate-limit layers.
fn api_routes(services: &AppServices) -> Router {
    let chat = ChatHandlers::new(
        Arc::new(CreateChatSessionHandler::new(
            services.chat_sessions.clone(),
            services.counselors.clone(),
        )),
        Arc::new(ListChatSessionsHandler::new(services.chat_sessions.clone())),
        Arc::new(GetChatSessionHandler::new(services.chat_sessions.clone())),
        Arc::new(SendChatMessageHandler::new(
            services.chat_sessions.clone(),
            services.ai_provider.clone(),
            SessionLocks::new(),
            services.chat.clone(),
        )),
        RateLimitCheck::new(services.rate_limiter.clone()),
    );

    let assessments = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(services.assessments.clone())),
        Arc::new(ListAssessmentsHandler::new(services.assessments.clone())),
    );

    let moods = MoodHandlers::new(
        Arc::new(RecordMoodHandler::new(services.moods.clone())),
        Arc::new(ListMoodsHandler::new(services.moods.clone())),
    );

    let journal = JournalHandlers::new(
        Arc::new(CreateJournalEntryHandler::new(services.journal.clone())),
        Arc::new(ListJournalEntriesHandler::new(services.journal.clone())),
        Arc::new(UpdateJournalEntryHandler::new(services.journal.clone())),
        Arc::new(DeleteJournalEntryHandler::new(services.journal.clone())),
    );

    let counselors = CounselorHandlers::new(
        Arc::new(ListCounselorsHandler::new(services.counselors.clone())),
        Arc::new(GetCounselorHandler::new(services.counselors.clone())),
    );

    Router::new()
        .nest("/auth", auth_routes())
        .nest("/assessments", assessment_routes(assessments))
        .nest("/chat-sessions", chat_routes(chat))
        .nest("/moods", mood_routes(moods))
        .nest("/journal", journal_routes(journal))
        .nest("/counselors", counselor_routes(counselors))
        .nest(
            "/achievements",
            achievement_routes(Arc::new(ListAchievementsHandler::new(
                services.achievements.clone(),
            ))),
        )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Builds the full application router.
pub fn build_router(services: AppServices, server: &ServerConfig) -> Router {
    let api = api_routes(&services)
        .layer(from_fn_with_state(
            services.rate_limiter.clone(),
            rate_limit_middleware,
        ))
        .layer(from_fn_with_state(
            services.session_validator.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
