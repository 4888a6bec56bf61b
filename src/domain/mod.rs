pub mod announcement;
pub mod teacher;

pub use announcement::{parse_timestamp, Announcement, AnnouncementUpdate};
pub use teacher::Teacher;
