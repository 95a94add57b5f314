pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat_handlers;
use crate::contact::handlers as contact_handlers;
use crate::content::handlers as content_handlers;
use crate::discovery;
use crate::reference;
use crate::state::AppState;
use crate::sync;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Conversational responder
        .route("/api/v1/chat", post(chat_handlers::handle_chat))
        // Contact form bridge
        .route("/api/v1/contact", post(contact_handlers::handle_contact))
        // Profile + sync trigger
        .route("/api/v1/profile", get(sync::handle_get_profile))
        .route("/api/v1/profile/sync", post(sync::handle_sync))
        .route("/api/v1/profile/sync/apply", post(sync::handle_sync_apply))
        // Content store sections
        .route(
            "/api/v1/content/experience",
            get(content_handlers::handle_experience),
        )
        .route(
            "/api/v1/content/projects",
            get(content_handlers::handle_projects),
        )
        .route(
            "/api/v1/content/projects/discover",
            get(discovery::handle_discover_projects),
        )
        .route(
            "/api/v1/content/certificates",
            get(content_handlers::handle_certificates),
        )
        .route("/api/v1/content/events", get(content_handlers::handle_events))
        .route("/api/v1/content/skills", get(content_handlers::handle_skills))
        // Paddock reference data
        .route(
            "/api/v1/reference/standings",
            get(reference::handle_standings),
        )
        .route("/api/v1/reference/news", get(reference::handle_news))
        .route(
            "/api/v1/reference/calendar",
            get(reference::handle_calendar),
        )
        .with_state(state)
}
