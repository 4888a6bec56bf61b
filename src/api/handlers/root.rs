use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Corkboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Announcement board for the school management system",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "announcements": "/announcements",
            "active": "/announcements/active"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
