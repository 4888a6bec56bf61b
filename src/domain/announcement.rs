use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// A timed message shown to users of the school management system.
///
/// An announcement is "active" when `end_date` has not yet passed and
/// `start_date` (if any) already has. Activity is derived at read time;
/// there is no stored status field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub message: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: DateTime<Utc>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// The fields an update is allowed to touch. `id`, `created_by` and
/// `created_at` are immutable once assigned.
#[derive(Debug, Clone)]
pub struct AnnouncementUpdate {
    pub message: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: DateTime<Utc>,
}

/// Parses an ISO-8601 timestamp from a request parameter.
///
/// Accepts RFC 3339 (with an offset or `Z`) as well as bare local forms
/// like `2000-01-01T00:00:00`, which are taken to be UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    s.parse::<NaiveDateTime>()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .map_err(|_| AppError::BadRequest("Invalid date format".to_string()))
}
