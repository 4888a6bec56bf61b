use chrono::{Duration, Utc};
use corkboard::{
    domain::{Announcement, AnnouncementUpdate, Teacher},
    repository::{
        AnnouncementRepository, SqliteAnnouncementRepository, SqliteTeacherRepository,
        TeacherRepository,
    },
};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn test_pool() -> anyhow::Result<SqlitePool> {
    // Single connection so the in-memory database is shared across queries
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

fn announcement(message: &str) -> Announcement {
    Announcement {
        id: Uuid::new_v4(),
        message: message.to_string(),
        start_date: None,
        end_date: Utc::now() + Duration::days(7),
        created_by: "mrodriguez".to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_announcement_crud() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool.clone());

    // Test Create
    let created = repo.create(announcement("Fire drill at noon")).await?;
    assert_eq!(created.message, "Fire drill at noon");
    assert_eq!(created.created_by, "mrodriguez");
    assert!(created.start_date.is_none());

    // Test Find by ID
    let found = repo.find_by_id(created.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    // Test Update: message and window change, created_by/created_at do not
    let new_start = Utc::now() - Duration::days(1);
    let new_end = Utc::now() + Duration::days(3);
    let updated = repo
        .update(
            created.id,
            AnnouncementUpdate {
                message: "Fire drill moved to 2pm".to_string(),
                start_date: Some(new_start),
                end_date: new_end,
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.message, "Fire drill moved to 2pm");
    assert_eq!(updated.start_date, Some(new_start));
    assert_eq!(updated.end_date, new_end);
    assert_eq!(updated.created_by, created.created_by);
    assert_eq!(updated.created_at, created.created_at);

    // Update against an id that does not exist
    let missing = repo
        .update(
            Uuid::new_v4(),
            AnnouncementUpdate {
                message: "nobody home".to_string(),
                start_date: None,
                end_date: new_end,
            },
        )
        .await?;
    assert!(missing.is_none());

    // Test Delete
    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

#[tokio::test]
async fn test_active_window() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool.clone());
    let now = Utc::now();

    let mut open_ended = announcement("No start date, still running");
    open_ended.end_date = now + Duration::days(1);
    let open_ended = repo.create(open_ended).await?;

    let mut windowed = announcement("Started yesterday, ends tomorrow");
    windowed.start_date = Some(now - Duration::days(1));
    windowed.end_date = now + Duration::days(1);
    let windowed = repo.create(windowed).await?;

    let mut expired = announcement("Ended last week");
    expired.end_date = now - Duration::days(7);
    let expired = repo.create(expired).await?;

    let mut scheduled = announcement("Starts tomorrow");
    scheduled.start_date = Some(now + Duration::days(1));
    scheduled.end_date = now + Duration::days(2);
    let scheduled = repo.create(scheduled).await?;

    let active = repo.list_active(now).await?;
    let active_ids: Vec<Uuid> = active.iter().map(|a| a.id).collect();

    assert_eq!(active.len(), 2);
    assert!(active_ids.contains(&open_ended.id));
    assert!(active_ids.contains(&windowed.id));
    assert!(!active_ids.contains(&expired.id));
    assert!(!active_ids.contains(&scheduled.id));

    // All four still show up in the full listing
    assert_eq!(repo.list_all().await?.len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_list_all_newest_first() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool.clone());
    let now = Utc::now();

    let mut oldest = announcement("oldest");
    oldest.created_at = now - Duration::days(2);
    repo.create(oldest).await?;

    let mut newest = announcement("newest");
    newest.created_at = now;
    repo.create(newest).await?;

    let mut middle = announcement("middle");
    middle.created_at = now - Duration::days(1);
    repo.create(middle).await?;

    let all = repo.list_all().await?;
    let messages: Vec<&str> = all.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(messages, vec!["newest", "middle", "oldest"]);

    for pair in all.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    Ok(())
}

#[tokio::test]
async fn test_teacher_existence() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteTeacherRepository::new(pool.clone());

    let teacher = repo
        .create(Teacher {
            username: "dchen".to_string(),
            display_name: "Mr. Chen".to_string(),
            created_at: Utc::now(),
        })
        .await?;
    assert_eq!(teacher.username, "dchen");

    assert!(repo.exists("dchen").await?);
    assert!(!repo.exists("ghost").await?);

    Ok(())
}
