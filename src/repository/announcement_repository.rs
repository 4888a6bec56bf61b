use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::{Announcement, AnnouncementUpdate},
    error::{AppError, Result},
    repository::AnnouncementRepository,
};

// Database row struct that matches the SQLite schema
#[derive(FromRow)]
struct AnnouncementRow {
    id: String,
    message: String,
    start_date: Option<NaiveDateTime>,
    end_date: NaiveDateTime,
    created_by: String,
    created_at: NaiveDateTime,
}

pub struct SqliteAnnouncementRepository {
    pool: SqlitePool,
}

impl SqliteAnnouncementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_announcement(row: AnnouncementRow) -> Result<Announcement> {
        Ok(Announcement {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            message: row.message,
            start_date: row
                .start_date
                .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
            end_date: DateTime::from_naive_utc_and_offset(row.end_date, Utc),
            created_by: row.created_by,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl AnnouncementRepository for SqliteAnnouncementRepository {
    async fn create(&self, announcement: Announcement) -> Result<Announcement> {
        let id_str = announcement.id.to_string();
        let start_date_naive = announcement.start_date.map(|dt| dt.naive_utc());
        let end_date_naive = announcement.end_date.naive_utc();
        let created_at_naive = announcement.created_at.naive_utc();

        sqlx::query(
            r#"
            INSERT INTO announcements (
                id, message, start_date, end_date, created_by, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&announcement.message)
        .bind(start_date_naive)
        .bind(end_date_naive)
        .bind(&announcement.created_by)
        .bind(created_at_naive)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(announcement.id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created announcement".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>> {
        let id_str = id.to_string();
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, message, start_date, end_date, created_by, created_at
            FROM announcements
            WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_announcement(r)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, message, start_date, end_date, created_by, created_at
            FROM announcements
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_announcement).collect()
    }

    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Announcement>> {
        let now_naive = now.naive_utc();

        // Both window bounds are inclusive: an announcement ending exactly
        // now is still active, as is one starting exactly now.
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, message, start_date, end_date, created_by, created_at
            FROM announcements
            WHERE end_date >= ?
              AND (start_date IS NULL OR start_date <= ?)
            "#,
        )
        .bind(now_naive)
        .bind(now_naive)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_announcement).collect()
    }

    async fn update(&self, id: Uuid, update: AnnouncementUpdate) -> Result<Option<Announcement>> {
        let id_str = id.to_string();
        let start_date_naive = update.start_date.map(|dt| dt.naive_utc());
        let end_date_naive = update.end_date.naive_utc();

        // created_by and created_at are deliberately left out of the SET.
        let result = sqlx::query(
            r#"
            UPDATE announcements
            SET message = ?, start_date = ?, end_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&update.message)
        .bind(start_date_naive)
        .bind(end_date_naive)
        .bind(&id_str)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let id_str = id.to_string();
        let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
