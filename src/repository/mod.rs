use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::*;
use crate::error::Result;

pub mod announcement_repository;
pub mod teacher_repository;

pub use announcement_repository::SqliteAnnouncementRepository;
pub use teacher_repository::SqliteTeacherRepository;

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, announcement: Announcement) -> Result<Announcement>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>>;
    /// Every announcement, newest created_at first.
    async fn list_all(&self) -> Result<Vec<Announcement>>;
    /// Announcements whose window contains `now`; both bounds inclusive.
    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Announcement>>;
    /// Returns `None` when no row matched the id.
    async fn update(&self, id: Uuid, update: AnnouncementUpdate) -> Result<Option<Announcement>>;
    /// Returns whether a row was actually removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn create(&self, teacher: Teacher) -> Result<Teacher>;
    async fn exists(&self, username: &str) -> Result<bool>;
}
