pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Settings,
    repository::{AnnouncementRepository, TeacherRepository},
};
use state::AppState;

pub fn create_app(
    announcement_repo: Arc<dyn AnnouncementRepository>,
    teacher_repo: Arc<dyn TeacherRepository>,
    settings: Arc<Settings>,
) -> Router {
    let app_state = AppState::new(announcement_repo, teacher_repo, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))
        // Announcement routes
        .nest("/announcements", announcement_routes())
        // Add state to the router
        .with_state(app_state)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive()) // Configure properly for production
        .layer(TraceLayer::new_for_http())
}

fn announcement_routes() -> Router<AppState> {
    Router::new()
        .route("/active", get(handlers::announcements::list_active))
        .route("/", get(handlers::announcements::list_all))
        .route("/", post(handlers::announcements::create))
        .route("/:id", put(handlers::announcements::update))
        .route("/:id", delete(handlers::announcements::delete))
}
