use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record from the school system. This service only ever checks
/// that one exists for a given username; no roles or credentials are
/// inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub username: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}
