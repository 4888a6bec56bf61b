use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{parse_timestamp, Announcement, AnnouncementUpdate},
    error::{AppError, Result},
};

/// Shared body for create and update. Dates arrive as ISO-8601 strings and
/// are validated here rather than by the deserializer so a malformed value
/// maps to a 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct AnnouncementPayload {
    pub message: String,
    pub end_date: String,
    pub username: String,
    pub start_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteAnnouncementQuery {
    pub username: String,
}

/// Authentication, such as it is: the caller is trusted if a teacher row
/// with their username exists. No credential or ownership check beyond
/// that — this mirrors the rest of the school system.
async fn require_known_teacher(state: &AppState, username: &str) -> Result<()> {
    if state.teacher_repo.exists(username).await? {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

/// Rejects malformed ids before anything touches the store.
fn parse_announcement_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::BadRequest("Invalid announcement ID".to_string()))
}

pub async fn list_active(State(state): State<AppState>) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.announcement_repo.list_active(Utc::now()).await?;
    Ok(Json(announcements))
}

pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.announcement_repo.list_all().await?;
    Ok(Json(announcements))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AnnouncementPayload>,
) -> Result<Json<Announcement>> {
    require_known_teacher(&state, &payload.username).await?;

    let end_date = parse_timestamp(&payload.end_date)?;
    let start_date = payload
        .start_date
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    let announcement = Announcement {
        id: Uuid::new_v4(),
        message: payload.message,
        start_date,
        end_date,
        created_by: payload.username,
        created_at: Utc::now(),
    };

    let created = state.announcement_repo.create(announcement).await?;

    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AnnouncementPayload>,
) -> Result<Json<Announcement>> {
    let id = parse_announcement_id(&id)?;

    require_known_teacher(&state, &payload.username).await?;

    let end_date = parse_timestamp(&payload.end_date)?;
    let start_date = payload
        .start_date
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    let update = AnnouncementUpdate {
        message: payload.message,
        start_date,
        end_date,
    };

    let updated = state
        .announcement_repo
        .update(id, update)
        .await?
        .ok_or(AppError::NotFound("Announcement not found".to_string()))?;

    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteAnnouncementQuery>,
) -> Result<Json<Value>> {
    let id = parse_announcement_id(&id)?;

    require_known_teacher(&state, &params.username).await?;

    let deleted = state.announcement_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Announcement not found".to_string()));
    }

    Ok(Json(json!({
        "message": "Announcement deleted successfully",
    })))
}
