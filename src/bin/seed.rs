use chrono::{Duration, Utc};
use clap::Parser;
use fake::{faker::lorem::en::Sentence, Fake};
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use corkboard::{
    domain::{Announcement, Teacher},
    repository::{
        AnnouncementRepository, SqliteAnnouncementRepository, SqliteTeacherRepository,
        TeacherRepository,
    },
};

/// Seeds the database with teachers and sample announcements.
#[derive(Parser)]
struct Args {
    /// Database to seed; falls back to DATABASE_URL, then corkboard.db
    #[arg(long)]
    database_url: Option<String>,

    /// How many random filler announcements to create
    #[arg(long, default_value_t = 5)]
    announcements: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("🌱 Starting database seeding...");

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:corkboard.db".to_string());

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    let teacher_repo = SqliteTeacherRepository::new(db_pool.clone());
    let announcement_repo = SqliteAnnouncementRepository::new(db_pool.clone());

    println!("👥 Creating teachers...");
    let teachers = [
        ("mrodriguez", "Ms. Rodriguez"),
        ("dchen", "Mr. Chen"),
        ("principal.martinez", "Principal Martinez"),
    ];
    for (username, display_name) in &teachers {
        teacher_repo
            .create(Teacher {
                username: (*username).to_string(),
                display_name: (*display_name).to_string(),
                created_at: Utc::now(),
            })
            .await?;
        println!("  ✅ Created teacher {}", username);
    }

    println!("📣 Creating announcements...");

    // One currently active, one scheduled, one already expired
    announcement_repo
        .create(Announcement {
            id: Uuid::new_v4(),
            message: "Welcome back! Club sign-ups close Friday.".to_string(),
            start_date: None,
            end_date: Utc::now() + Duration::days(14),
            created_by: "principal.martinez".to_string(),
            created_at: Utc::now(),
        })
        .await?;

    announcement_repo
        .create(Announcement {
            id: Uuid::new_v4(),
            message: "Spring concert tickets go on sale next month.".to_string(),
            start_date: Some(Utc::now() + Duration::days(20)),
            end_date: Utc::now() + Duration::days(45),
            created_by: "dchen".to_string(),
            created_at: Utc::now(),
        })
        .await?;

    announcement_repo
        .create(Announcement {
            id: Uuid::new_v4(),
            message: "Picture day has been rescheduled.".to_string(),
            start_date: None,
            end_date: Utc::now() - Duration::days(7),
            created_by: "mrodriguez".to_string(),
            created_at: Utc::now() - Duration::days(30),
        })
        .await?;

    for i in 0..args.announcements {
        let message: String = Sentence(4..10).fake();
        let (username, _) = teachers[i % teachers.len()];
        announcement_repo
            .create(Announcement {
                id: Uuid::new_v4(),
                message,
                start_date: None,
                end_date: Utc::now() + Duration::days(7 + i as i64),
                created_by: username.to_string(),
                created_at: Utc::now(),
            })
            .await?;
    }

    println!(
        "✨ Done: {} teachers, {} announcements",
        teachers.len(),
        3 + args.announcements
    );

    Ok(())
}
