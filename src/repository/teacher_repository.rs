use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::{
    domain::Teacher,
    error::{AppError, Result},
    repository::TeacherRepository,
};

#[derive(FromRow)]
struct TeacherRow {
    username: String,
    display_name: String,
    created_at: NaiveDateTime,
}

pub struct SqliteTeacherRepository {
    pool: SqlitePool,
}

impl SqliteTeacherRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_teacher(row: TeacherRow) -> Teacher {
        Teacher {
            username: row.username,
            display_name: row.display_name,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        }
    }
}

#[async_trait]
impl TeacherRepository for SqliteTeacherRepository {
    async fn create(&self, teacher: Teacher) -> Result<Teacher> {
        let created_at_naive = teacher.created_at.naive_utc();

        sqlx::query(
            r#"
            INSERT INTO teachers (username, display_name, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&teacher.username)
        .bind(&teacher.display_name)
        .bind(created_at_naive)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        let row = sqlx::query_as::<_, TeacherRow>(
            "SELECT username, display_name, created_at FROM teachers WHERE username = ?",
        )
        .bind(&teacher.username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(Self::row_to_teacher(row))
    }

    async fn exists(&self, username: &str) -> Result<bool> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT username FROM teachers WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.is_some())
    }
}
