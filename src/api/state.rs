use std::sync::Arc;

use crate::{
    config::Settings,
    repository::{AnnouncementRepository, TeacherRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub announcement_repo: Arc<dyn AnnouncementRepository>,
    pub teacher_repo: Arc<dyn TeacherRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        announcement_repo: Arc<dyn AnnouncementRepository>,
        teacher_repo: Arc<dyn TeacherRepository>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            announcement_repo,
            teacher_repo,
            settings,
        }
    }
}
